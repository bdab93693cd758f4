//! Dashboard Page
//!
//! Filter form over `GET /SSD` and the paginated results.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::components::{NoticeKind, NoticeList, ResultsTable};
use crate::context::use_auth;
use crate::feedback::NO_RESULTS;
use crate::models::{SystemFilter, SystemRecord};
use crate::routes;

/// Empty-result notice only makes sense once the user has searched
fn shows_no_results(already_filtered: bool, result_count: usize) -> bool {
    already_filtered && result_count == 0
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (descricao, set_descricao) = signal(String::new());
    let (sigla, set_sigla) = signal(String::new());
    let (email_atendimento, set_email_atendimento) = signal(String::new());
    let (records, set_records) = signal(Vec::<SystemRecord>::new());
    let (already_filtered, set_already_filtered) = signal(false);

    let search = move |_| {
        let filter = SystemFilter {
            descricao: descricao.get_untracked(),
            sigla: sigla.get_untracked(),
            email_atendimento: email_atendimento.get_untracked(),
        };
        spawn_local(async move {
            match api::list_systems(auth, &filter).await {
                Ok(loaded) => {
                    log::debug!("[Dashboard] {} systems match {:?}", loaded.len(), filter);
                    set_records.set(loaded);
                    set_already_filtered.set(true);
                }
                Err(e) => log::warn!("[Dashboard] search failed: {}", e),
            }
        });
    };

    let clear = move |_| {
        set_descricao.set(String::new());
        set_sigla.set(String::new());
        set_email_atendimento.set(String::new());
        set_records.set(Vec::new());
        set_already_filtered.set(false);
    };

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            auth.sign_out();
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    };

    let new_system = {
        let navigate = navigate.clone();
        move |_| navigate(routes::SYSTEM_INCLUDE, NavigateOptions::default())
    };

    // Row clicks only record the id; navigation happens here
    let editing = RwSignal::new(None::<u32>);
    let on_edit = Callback::new(move |id: u32| editing.set(Some(id)));
    Effect::new(move |_| {
        if let Some(id) = editing.get() {
            navigate(&routes::edit_path(id), NavigateOptions::default());
        }
    });

    let no_results = Signal::derive(move || {
        if shows_no_results(already_filtered.get(), records.with(Vec::len)) {
            vec![NO_RESULTS.to_string()]
        } else {
            Vec::new()
        }
    });

    view! {
        <div class="dashboard-page">
            <form class="header-form" on:submit=|ev| ev.prevent_default()>
                <h5>"Filtro de Consulta"</h5>
                <div class="form-row">
                    <label for="filter-descricao">"Descrição"</label>
                    <input
                        id="filter-descricao"
                        type="text"
                        prop:value=move || descricao.get()
                        on:input=move |ev| set_descricao.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label for="filter-sigla">"Sigla"</label>
                    <input
                        id="filter-sigla"
                        type="text"
                        prop:value=move || sigla.get()
                        on:input=move |ev| set_sigla.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label for="filter-email">"E-mail de atendimento do sistema"</label>
                    <input
                        id="filter-email"
                        type="text"
                        prop:value=move || email_atendimento.get()
                        on:input=move |ev| set_email_atendimento.set(event_target_value(&ev))
                    />
                </div>
            </form>

            <NoticeList kind=NoticeKind::Warning messages=no_results />

            <Show when=move || !records.with(Vec::is_empty)>
                <ResultsTable records=records on_edit=on_edit />
            </Show>

            <div class="buttons-container">
                <button class="btn btn-light" on:click=logout>"Deslogar"</button>
                <div>
                    <button class="btn btn-light" on:click=search>"Pesquisar"</button>
                    <button class="btn btn-light" on:click=clear>"Limpar"</button>
                    <button class="btn btn-light" on:click=new_system>"Novo Sistema"</button>
                </div>
            </div>
        </div>
    }
}
