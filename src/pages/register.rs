//! Account registration page for students and faculty.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful registration persists the returned session just like login,
//! then sends the user to `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::LOGIN_ROUTE;
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::{AuthResponse, DEPARTMENTS, RegisterRequest, Role};
use crate::state::session::Session;

/// Text announcing a completed registration.
fn success_notice(resp: &AuthResponse) -> String {
    if resp.message.is_empty() {
        "Registration successful".to_owned()
    } else {
        resp.message.clone()
    }
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating Account..." } else { "Create Account" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        let request = RegisterRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            department: department.get(),
            role: role.get(),
        };
        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&config, &request).await {
                Ok(resp) => {
                    log::info!("{} for {}", success_notice(&resp), resp.email);
                    if let Err(e) = Session::browser().persist(&resp) {
                        log::warn!("session not persisted: {e}");
                    }
                    navigate(LOGIN_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    let department_options = DEPARTMENTS
        .iter()
        .map(|d| view! { <option value=d.code>{d.name}</option> })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Register to get started"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        placeholder="John Doe"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <label for="department">"Department"</label>
                    <select
                        id="department"
                        class="auth-input"
                        required=true
                        prop:value=move || department.get()
                        on:change=move |ev| department.set(event_target_value(&ev))
                    >
                        <option value="" disabled=true>"Select department"</option>
                        {department_options}
                    </select>
                    <fieldset class="auth-roles">
                        <legend>"I am a"</legend>
                        <label>
                            <input
                                type="radio"
                                name="role"
                                value="student"
                                prop:checked=move || role.get() == Role::Student
                                on:change=move |_| role.set(Role::Student)
                            />
                            "Student"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="role"
                                value="faculty"
                                prop:checked=move || role.get() == Role::Faculty
                                on:change=move |_| role.set(Role::Faculty)
                            />
                            "Faculty"
                        </label>
                    </fieldset>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE>"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
