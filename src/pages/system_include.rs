//! System Include Page
//!
//! Create form for a new system record.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use reactive_stores::Store;

use crate::api;
use crate::components::{NoticeKind, NoticeList, SystemFields};
use crate::context::use_auth;
use crate::feedback::{self, CREATED};
use crate::routes;
use crate::store::SystemDraft;

#[component]
pub fn SystemIncludePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let draft = Store::new(SystemDraft::default());
    let (loading, set_loading) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (created, set_created) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_created.set(false);
        let body = match draft.with_untracked(SystemDraft::to_new_system) {
            Ok(body) => body,
            Err(messages) => {
                set_errors.set(messages);
                return;
            }
        };

        set_errors.set(Vec::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::create_system(auth, &body).await {
                Ok(record) => {
                    log::info!("[SystemInclude] created {} (id {:?})", body.sigla, record.map(|r| r.id));
                    draft.set(SystemDraft::default());
                    set_created.set(true);
                }
                Err(e) => {
                    log::warn!("[SystemInclude] create failed: {}", e);
                    set_errors.set(vec![feedback::create_failure(&e).to_string()]);
                }
            }
            set_loading.set(false);
        });
    };

    let success = Signal::derive(move || {
        if created.get() {
            vec![CREATED.to_string()]
        } else {
            Vec::new()
        }
    });

    view! {
        <div class="system-include-page">
            <form class="header-form" on:submit=on_submit>
                <div class="form-header">
                    <h5>"Manter Sistema"</h5>
                    <span class="text-danger">"* Campos Obrigatórios"</span>
                </div>
                <SystemFields draft=draft disabled=loading />
                <NoticeList kind=NoticeKind::Danger messages=errors />
                <NoticeList kind=NoticeKind::Success messages=success />

                <div class="buttons-container">
                    <button
                        type="button"
                        class="btn btn-light"
                        on:click=move |_| navigate(routes::DASHBOARD, NavigateOptions::default())
                    >
                        "Voltar"
                    </button>
                    <button type="submit" class="btn btn-light" disabled=move || loading.get()>
                        {move || if loading.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
