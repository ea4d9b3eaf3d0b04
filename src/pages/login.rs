//! Email + password sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the auth reply is persisted to the session and the router moves
//! to the dashboard matching the returned role. Failures are shown inline
//! with the server's message.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{FACULTY_DASHBOARD_ROUTE, REGISTER_ROUTE, STUDENT_DASHBOARD_ROUTE};
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::{LoginRequest, Role};
use crate::state::session::Session;

/// Dashboard route for a role string as returned by the server.
/// Anything that is not `faculty` lands on the student dashboard.
pub fn dashboard_route(role: &str) -> &'static str {
    match Role::parse(role) {
        Some(Role::Faculty) => FACULTY_DASHBOARD_ROUTE,
        _ => STUDENT_DASHBOARD_ROUTE,
    }
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing In..." } else { "Sign In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        let request = LoginRequest { email: email.get(), password: password.get() };
        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&config, &request).await {
                Ok(resp) => {
                    log::info!("signed in as {}", resp.email);
                    if let Err(e) = Session::browser().persist(&resp) {
                        log::warn!("session not persisted: {e}");
                    }
                    navigate(dashboard_route(&resp.role), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="student@university.edu"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=REGISTER_ROUTE>"Register"</a>
                </p>
            </div>
        </div>
    }
}
