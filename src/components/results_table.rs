//! Results Table Component
//!
//! Paginated table of system records with first/prev/page/next/last controls.

use leptos::prelude::*;

use crate::models::SystemRecord;
use crate::pagination::PageState;

/// One page of records at a time. Clicking the edit cell reports the id;
/// navigation is left to the caller.
#[component]
pub fn ResultsTable(
    #[prop(into)] records: Signal<Vec<SystemRecord>>,
    #[prop(into)] on_edit: Callback<u32>,
) -> impl IntoView {
    let page = RwSignal::new(PageState::<SystemRecord>::default());

    // Keep the current page when a new result set still has it
    Effect::new(move |_| {
        let loaded = records.get();
        page.update(|p| p.set_records(loaded));
    });

    let rows = move || {
        page.with(|p| p.visible().to_vec())
            .into_iter()
            .map(|record| {
                let id = record.id;
                view! {
                    <tr class="row">
                        <td class="col-3">{record.descricao}</td>
                        <td class="col-1">{record.sigla}</td>
                        <td class="col-3">{record.email_atendimento}</td>
                        <td class="col-3">{record.url}</td>
                        <td class="col-1">{record.status.map(|s| s.as_str()).unwrap_or_default()}</td>
                        <td class="col-1 edit-cell" title="Editar" on:click=move |_| on_edit.run(id)>
                            "✎"
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <table class="results-table striped">
            <thead>
                <tr class="row">
                    <th class="col-3">"Descrição"</th>
                    <th class="col-1">"Sigla"</th>
                    <th class="col-3">"E-mail de atendimento"</th>
                    <th class="col-3">"URL"</th>
                    <th class="col-1">"Status"</th>
                    <th class="col-1">"Ações"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>

        <Show when=move || page.with(|p| p.shows_controls())>
            <PaginationBar page=page />
        </Show>
    }
}

#[component]
fn PaginationBar(page: RwSignal<PageState<SystemRecord>>) -> impl IntoView {
    let pages = move || {
        let (count, current) = page.with(|p| (p.page_count(), p.current_page()));
        (1..=count)
            .map(|n| {
                let class = if n == current { "page-item active" } else { "page-item" };
                view! {
                    <li class=class>
                        <button class="page-link" on:click=move |_| page.update(|p| p.go_to(n))>
                            {n}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <ul class="pagination">
            <li class="page-item">
                <button class="page-link" on:click=move |_| page.update(|p| p.first())>"«"</button>
            </li>
            <li class="page-item">
                <button class="page-link" on:click=move |_| page.update(|p| p.prev())>"‹"</button>
            </li>
            {pages}
            <li class="page-item">
                <button class="page-link" on:click=move |_| page.update(|p| p.next())>"›"</button>
            </li>
            <li class="page-item">
                <button class="page-link" on:click=move |_| page.update(|p| p.last())>"»"</button>
            </li>
        </ul>
    }
}
