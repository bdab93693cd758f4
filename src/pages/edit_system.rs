//! Edit System Page
//!
//! Loads one record, lets the user change its fields and status, and
//! requires a justification for every change.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use reactive_stores::Store;

use crate::api;
use crate::components::{NoticeKind, NoticeList, SystemFields};
use crate::config::JUSTIFICATION_MAX_LEN;
use crate::context::use_auth;
use crate::feedback::{self, remaining_chars, UPDATED};
use crate::models::{SystemRecord, SystemStatus};
use crate::routes;
use crate::store::{SystemDraft, SystemDraftStoreFields};

#[component]
pub fn EditSystemPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let system_id = Memo::new(move |_| routes::parse_id(params.with(|p| p.get("id"))));

    let draft = Store::new(SystemDraft::default());
    let (record, set_record) = signal(None::<SystemRecord>);
    let (loading, set_loading) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (updated, set_updated) = signal(false);

    // Load the record on mount
    Effect::new(move |_| {
        let Some(id) = system_id.get() else {
            log::warn!("[EditSystem] route has no valid id");
            set_errors.set(vec![feedback::BAD_DATA.to_string()]);
            return;
        };
        spawn_local(async move {
            match api::get_system(auth, id).await {
                Ok(loaded) => {
                    log::debug!("[EditSystem] loaded system {}", loaded.id);
                    draft.set(SystemDraft::from_record(&loaded));
                    set_record.set(Some(loaded));
                }
                Err(e) => {
                    log::warn!("[EditSystem] could not load system {}: {}", id, e);
                    set_errors.set(vec![feedback::load_failure(&e).to_string()]);
                }
            }
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let Some(id) = system_id.get_untracked() else {
            return;
        };
        set_updated.set(false);
        let update = match draft.with_untracked(|d| d.to_update(id)) {
            Ok(update) => update,
            Err(messages) => {
                set_errors.set(messages);
                return;
            }
        };

        set_errors.set(Vec::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::update_system(auth, &update).await {
                Ok(_) => {
                    log::info!("[EditSystem] updated system {} ({})", update.id, update.status.as_str());
                    set_updated.set(true);
                }
                Err(e) => {
                    log::warn!("[EditSystem] update of {} failed: {}", update.id, e);
                    set_errors.set(vec![feedback::edit_failure(&e).to_string()]);
                }
            }
            set_loading.set(false);
        });
    };

    let success = Signal::derive(move || {
        if updated.get() {
            vec![UPDATED.to_string()]
        } else {
            Vec::new()
        }
    });

    // Display-only values from the fetched record
    let last_change = move |field: fn(&SystemRecord) -> Option<String>| {
        move || record.with(|r| r.as_ref().and_then(field).unwrap_or_default())
    };

    view! {
        <div class="edit-system-page">
            <form class="header-form" on:submit=on_submit>
                <div class="form-header">
                    <h5>"Dados do Sistema"</h5>
                    <span class="text-danger">"* Campos Obrigatórios"</span>
                </div>
                <SystemFields draft=draft disabled=loading />

                <h5>"Controle do Sistema"</h5>
                <div class="form-row">
                    <label for="status"><span class="text-danger">"*"</span>" Status"</label>
                    <select
                        id="status"
                        disabled=move || loading.get()
                        prop:value=move || draft.status().get()
                        on:change=move |ev| draft.status().set(event_target_value(&ev))
                    >
                        {SystemStatus::ALL
                            .iter()
                            .map(|status| {
                                let value = status.as_str();
                                view! { <option value=value>{value}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-row">
                    <label>"Usuário responsável pela última alteração"</label>
                    <input type="text" disabled=true prop:value=last_change(|r| r.usuario_ultima_alteracao.clone()) />
                </div>
                <div class="form-row">
                    <label>"Data da última alteração"</label>
                    <input type="text" disabled=true prop:value=last_change(|r| r.data_ultima_alteracao.clone()) />
                </div>
                <div class="form-row">
                    <label>"Justificativa da última alteração"</label>
                    <textarea rows="3" disabled=true prop:value=last_change(|r| r.justificativa_ultima_alteracao.clone()) />
                </div>
                <div class="form-row">
                    <label for="nova-justificativa">
                        <span class="text-danger">"*"</span>
                        " Nova justificativa de alteração"
                        <span class="text-success">
                            " Quantidade de caracteres disponíveis: "
                            <strong>
                                {move || draft.nova_justificativa().with(|j| remaining_chars(j, JUSTIFICATION_MAX_LEN))}
                            </strong>
                        </span>
                    </label>
                    <textarea
                        id="nova-justificativa"
                        rows="3"
                        maxlength="500"
                        disabled=move || loading.get()
                        prop:value=move || draft.nova_justificativa().get()
                        on:input=move |ev| draft.nova_justificativa().set(event_target_value(&ev))
                    />
                </div>

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
