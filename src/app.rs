//! SSD Admin App
//!
//! Root component: restores the session, provides it to every page and
//! routes between the guest pages and the dashboard pages.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::context::{use_auth, AuthContext};
use crate::pages::{DashboardPage, EditSystemPage, LoginPage, RegisterPage, SystemIncludePage};
use crate::routes::{self, Access};

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::restore();
    log::info!("[APP] session restored, logged_in={}", auth.is_logged_in());
    provide_context(auth);

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=move || view! { <Redirect path=routes::home(auth.is_logged_in()) /> }>
                    <Route
                        path=path!("/login")
                        view=|| view! { <Guard access=Access::GuestOnly><LoginPage /></Guard> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <Guard access=Access::GuestOnly><RegisterPage /></Guard> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <Guard access=Access::SignedIn><DashboardPage /></Guard> }
                    />
                    <Route
                        path=path!("/dashboard/system-include")
                        view=|| view! { <Guard access=Access::SignedIn><SystemIncludePage /></Guard> }
                    />
                    <Route
                        path=path!("/dashboard/edit/:id")
                        view=|| view! { <Guard access=Access::SignedIn><EditSystemPage /></Guard> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders `children` only when the current auth state may see the route
#[component]
fn Guard(access: Access, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    move || match routes::redirect_for(access, auth.is_logged_in()) {
        Some(target) => {
            log::debug!("[Guard] {:?} route, redirecting to {}", access, target);
            view! { <Redirect path=target /> }.into_any()
        }
        None => children().into_any(),
    }
}
