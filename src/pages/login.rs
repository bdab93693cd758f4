//! Login Page
//!
//! Email + password sign-in. A successful login stores the token and opens
//! the dashboard.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::components::{NoticeKind, NoticeList};
use crate::context::use_auth;
use crate::feedback::{self, LOGIN_INCOMPLETE, SESSION_EXPIRED};
use crate::models::Credentials;
use crate::routes;
use crate::validation;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let initial_notice = if auth.session_expired() {
        vec![SESSION_EXPIRED.to_string()]
    } else {
        Vec::new()
    };
    let (errors, set_errors) = signal(initial_notice);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let credentials = Credentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if validation::validate_login(&credentials.email, &credentials.password).is_err() {
            set_errors.set(vec![LOGIN_INCOMPLETE.to_string()]);
            return;
        }

        set_errors.set(Vec::new());
        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(auth, &credentials).await {
                Ok(response) => {
                    log::info!("[Login] signed in as {}", credentials.email);
                    if let Err(e) = auth.sign_in(response.token) {
                        log::warn!("[Login] token not persisted: {}", e);
                    }
                    navigate(routes::DASHBOARD, NavigateOptions::default());
                }
                Err(e) => {
                    log::info!("[Login] rejected: {}", e);
                    set_loading.set(false);
                    set_errors.set(vec![feedback::login_failure(&e).to_string()]);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form id="login-form" class="auth-card" on:submit=on_submit>
                <h2>"Entrar"</h2>
                <input
                    type="text"
                    placeholder="Email"
                    disabled=move || loading.get()
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Senha"
                    disabled=move || loading.get()
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <NoticeList kind=NoticeKind::Danger messages=errors />
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Entrando..." } else { "Entrar" }}
                </button>
                <a class="btn btn-secondary" href=routes::REGISTER>"Registrar"</a>
            </form>
        </div>
    }
}
