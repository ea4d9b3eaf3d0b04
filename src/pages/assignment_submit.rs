//! Student assignment submission form at `/student/assignment/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! No submission endpoint is called yet: the form keeps its comments in page
//! signals, confirms inline, and returns to the student dashboard after
//! a short pause.

#[cfg(test)]
#[path = "assignment_submit_test.rs"]
mod assignment_submit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::STUDENT_DASHBOARD_ROUTE;

pub const SUBMITTED_NOTICE: &str = "Assignment submitted successfully!";

/// Assignment id from the route segment. Ids are positive integers.
pub fn parse_assignment_id(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Some(id),
        _ => None,
    }
}

fn assignment_heading(id: Option<u32>) -> String {
    match id {
        Some(id) => format!("Assignment #{id}"),
        None => "Unknown assignment".to_owned(),
    }
}

fn submit_label(submitted: bool) -> &'static str {
    if submitted { "Submitted" } else { "Submit Assignment" }
}

#[component]
pub fn AssignmentSubmitPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let assignment_id = move || params.with(|p| p.get("id")).as_deref().and_then(parse_assignment_id);

    let comments = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitted.get() {
                return;
            }
            let Some(id) = assignment_id() else {
                notice.set("This assignment does not exist.".to_owned());
                return;
            };
            submitted.set(true);
            log::info!("assignment {id} submitted ({} chars of comments)", comments.get().len());
            notice.set(SUBMITTED_NOTICE.to_owned());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                #[cfg(feature = "csr")]
                gloo_timers::future::sleep(super::RETURN_DELAY).await;
                navigate(STUDENT_DASHBOARD_ROUTE, NavigateOptions::default());
            });
        }
    };

    let on_cancel = move |_| navigate(STUDENT_DASHBOARD_ROUTE, NavigateOptions::default());

    view! {
        <div class="form-page">
            <header class="form-page__header">
                <a class="form-page__back" href=STUDENT_DASHBOARD_ROUTE>"Back to Dashboard"</a>
            </header>
            <div class="auth-card form-page__card">
                <h1>{move || assignment_heading(assignment_id())}</h1>
                <p class="auth-card__subtitle">"Add any comments for the instructor"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="comments">"Comments (Optional)"</label>
                    <textarea
                        id="comments"
                        class="auth-input"
                        rows="4"
                        placeholder="Add any notes or comments for your instructor..."
                        prop:value=move || comments.get()
                        on:input=move |ev| comments.set(event_target_value(&ev))
                    ></textarea>
                    <div class="form-page__actions">
                        <button class="form-page__cancel" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="auth-button" type="submit" disabled=move || submitted.get()>
                            {move || submit_label(submitted.get())}
                        </button>
                    </div>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
