//! System Fields Component
//!
//! The four record inputs shared by the create and edit forms.

use leptos::prelude::*;

use crate::store::{SystemDraftStore, SystemDraftStoreFields};

#[component]
pub fn SystemFields(
    draft: SystemDraftStore,
    /// Inputs are locked while a request is in flight
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label for="descricao"><span class="text-danger">"*"</span>" Descrição"</label>
            <input
                id="descricao"
                type="text"
                maxlength="100"
                disabled=move || disabled.get()
                prop:value=move || draft.descricao().get()
                on:input=move |ev| draft.descricao().set(event_target_value(&ev))
            />
        </div>
        <div class="form-row">
            <label for="sigla"><span class="text-danger">"*"</span>" Sigla"</label>
            <input
                id="sigla"
                type="text"
                maxlength="10"
                disabled=move || disabled.get()
                prop:value=move || draft.sigla().get()
                on:input=move |ev| draft.sigla().set(event_target_value(&ev))
            />
        </div>
        <div class="form-row">
            <label for="email-atendimento">"E-mail de atendimento do sistema"</label>
            <input
                id="email-atendimento"
                type="text"
                maxlength="100"
                disabled=move || disabled.get()
                prop:value=move || draft.email_atendimento().get()
                on:input=move |ev| draft.email_atendimento().set(event_target_value(&ev))
            />
        </div>
        <div class="form-row">
            <label for="url">"Url"</label>
            <input
                id="url"
                type="text"
                maxlength="50"
                disabled=move || disabled.get()
                prop:value=move || draft.url().get()
                on:input=move |ev| draft.url().set(event_target_value(&ev))
            />
        </div>
    }
}
