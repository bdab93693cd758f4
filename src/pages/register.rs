//! Register Page
//!
//! Account creation. After the success notice has been on screen for a
//! moment the returned token is stored, which moves the router to the
//! dashboard.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NoticeKind, NoticeList};
use crate::config::REGISTER_LOGIN_DELAY_MS;
use crate::context::use_auth;
use crate::feedback::{self, REGISTERED};
use crate::models::Registration;
use crate::routes;
use crate::validation;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (registered, set_registered) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let registration = Registration {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(messages) = validation::validate_registration(
            &registration.email,
            &registration.password,
            &registration.confirm_password,
        ) {
            set_errors.set(messages);
            return;
        }

        set_errors.set(Vec::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::register(auth, &registration).await {
                Ok(response) => {
                    log::info!("[Register] account created for {}", registration.email);
                    set_registered.set(true);
                    set_loading.set(false);
                    TimeoutFuture::new(REGISTER_LOGIN_DELAY_MS).await;
                    if let Err(e) = auth.sign_in(response.token) {
                        log::warn!("[Register] token not persisted: {}", e);
                    }
                }
                Err(e) => {
                    log::info!("[Register] rejected: {}", e);
                    set_loading.set(false);
                    set_errors.set(vec![feedback::register_failure(&e).to_string()]);
                }
            }
        });
    };

    let success = Signal::derive(move || {
        if registered.get() {
            vec![REGISTERED.to_string()]
        } else {
            Vec::new()
        }
    });

    view! {
        <div class="auth-page">
            <form id="register-form" class="auth-card" novalidate=true on:submit=on_submit>
                <h2>"Registrar"</h2>
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
                <input
                    type="password"
                    placeholder="Confirmação de senha"
                    disabled=move || loading.get()
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />
                <NoticeList kind=NoticeKind::Danger messages=errors />
                <NoticeList kind=NoticeKind::Success messages=success />
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Registrando..." } else { "Registrar" }}
                </button>
                <a class="btn btn-secondary" href=routes::LOGIN>"Entrar"</a>
            </form>
        </div>
    }
}
