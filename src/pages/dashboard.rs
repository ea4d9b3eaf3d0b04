//! Student and faculty dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dashboards greet the user by the name persisted at login, falling back
//! to the role label. They do not check the stored role or token: any visitor
//! can open either route, and an empty session simply reads as the fallback.
//! Students open an assignment's submission form by number; faculty link to
//! the create-assignment form.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::assignment_submit::parse_assignment_id;
use super::{CREATE_ASSIGNMENT_ROUTE, assignment_route};
use crate::components::dashboard_header::DashboardHeader;
use crate::net::types::Role;
use crate::state::session::Session;

/// Header greeting line for `role`.
pub fn greeting(role: Role, name: &str) -> String {
    match role {
        Role::Student => format!("Welcome back, {name}"),
        Role::Faculty => format!("Welcome, Prof. {name}"),
    }
}

fn portal_title(role: Role) -> &'static str {
    match role {
        Role::Student => "Student Portal",
        Role::Faculty => "Faculty Portal",
    }
}

#[component]
fn StudentBody() -> impl IntoView {
    let navigate = use_navigate();
    let assignment = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match parse_assignment_id(&assignment.get()) {
            Some(id) => navigate(&assignment_route(id), NavigateOptions::default()),
            None => error.set("Enter a valid assignment number.".to_owned()),
        }
    };

    view! {
        <section class="dashboard__section">
            <h2>"Submit an Assignment"</h2>
            <form class="dashboard__open" on:submit=on_open>
                <input
                    class="auth-input"
                    inputmode="numeric"
                    placeholder="Assignment number"
                    required=true
                    prop:value=move || assignment.get()
                    on:input=move |ev| {
                        error.set(String::new());
                        assignment.set(event_target_value(&ev));
                    }
                />
                <button class="auth-button" type="submit">"Open"</button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="auth-message auth-message--error">{move || error.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn FacultyBody() -> impl IntoView {
    view! {
        <section class="dashboard__section">
            <h2>"Assignments"</h2>
            <p>"Publish a new assignment for your students."</p>
            <a class="auth-button" href=CREATE_ASSIGNMENT_ROUTE>"Create Assignment"</a>
        </section>
    }
}

#[component]
fn Dashboard(role: Role) -> impl IntoView {
    let name = Session::browser().display_name_for(role);

    let body = match role {
        Role::Student => view! { <StudentBody/> }.into_any(),
        Role::Faculty => view! { <FacultyBody/> }.into_any(),
    };

    view! {
        <div class="dashboard">
            {match role {
                Role::Student => view! {
                    <DashboardHeader title=portal_title(role) greeting=greeting(role, &name)/>
                }.into_any(),
                Role::Faculty => view! {
                    <DashboardHeader title=portal_title(role) greeting=greeting(role, &name)>
                        <a class="dashboard-header__action" href=CREATE_ASSIGNMENT_ROUTE>"New Assignment"</a>
                    </DashboardHeader>
                }.into_any(),
            }}
            <main class="dashboard__body">{body}</main>
        </div>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! { <Dashboard role=Role::Student/> }
}

#[component]
pub fn FacultyDashboardPage() -> impl IntoView {
    view! { <Dashboard role=Role::Faculty/> }
}
