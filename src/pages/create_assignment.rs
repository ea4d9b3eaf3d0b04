//! Faculty form for publishing a new assignment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft is validated and logged but not sent anywhere: there is no
//! assignment endpoint yet. On success the page confirms inline and returns
//! to the faculty dashboard.

#[cfg(test)]
#[path = "create_assignment_test.rs"]
mod create_assignment_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::FACULTY_DASHBOARD_ROUTE;

pub const CREATED_NOTICE: &str = "Assignment created successfully!";
pub const DEFAULT_MAX_POINTS: u32 = 100;

/// Selectable course: code and display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub code: &'static str,
    pub title: &'static str,
}

pub const COURSES: &[Course] = &[
    Course { code: "CS 101", title: "Introduction to Programming" },
    Course { code: "CS 201", title: "Data Structures" },
    Course { code: "CS 301", title: "Database Systems" },
    Course { code: "CS 401", title: "Web Development" },
];

/// Validated contents of the create form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub course: String,
    pub description: String,
    /// `YYYY-MM-DD` as produced by a date input.
    pub due_date: String,
    pub max_points: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Maximum points must be a whole number of at least 1")]
    InvalidPoints,
}

impl AssignmentDraft {
    /// Build a draft from raw form fields. Text fields are trimmed.
    ///
    /// # Errors
    ///
    /// [`DraftError::Missing`] for the first blank field,
    /// [`DraftError::InvalidPoints`] when the points are not a positive integer.
    pub fn from_fields(
        title: &str,
        course: &str,
        description: &str,
        due_date: &str,
        max_points: &str,
    ) -> Result<Self, DraftError> {
        let title = required("Title", title)?;
        let course = required("Course", course)?;
        let description = required("Description", description)?;
        let due_date = required("Due date", due_date)?;
        let max_points = match max_points.trim().parse::<u32>() {
            Ok(points) if points >= 1 => points,
            _ => return Err(DraftError::InvalidPoints),
        };
        Ok(Self { title, course, description, due_date, max_points })
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, DraftError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DraftError::Missing(field));
    }
    Ok(value.to_owned())
}

#[component]
pub fn CreateAssignmentPage() -> impl IntoView {
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let course = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let due_date = RwSignal::new(String::new());
    let max_points = RwSignal::new(DEFAULT_MAX_POINTS.to_string());
    let notice = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let created = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if created.get() {
                return;
            }
            let draft = match AssignmentDraft::from_fields(
                &title.get(),
                &course.get(),
                &description.get(),
                &due_date.get(),
                &max_points.get(),
            ) {
                Ok(draft) => draft,
                Err(e) => {
                    error.set(e.to_string());
                    return;
                }
            };
            created.set(true);
            error.set(String::new());
            log::info!(
                "assignment {:?} for {} due {} ({} pts)",
                draft.title,
                draft.course,
                draft.due_date,
                draft.max_points
            );
            notice.set(CREATED_NOTICE.to_owned());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                #[cfg(feature = "csr")]
                gloo_timers::future::sleep(super::RETURN_DELAY).await;
                navigate(FACULTY_DASHBOARD_ROUTE, NavigateOptions::default());
            });
        }
    };

    let on_cancel = move |_| navigate(FACULTY_DASHBOARD_ROUTE, NavigateOptions::default());

    let course_options = COURSES
        .iter()
        .map(|c| view! { <option value=c.code>{format!("{} - {}", c.code, c.title)}</option> })
        .collect_view();

    view! {
        <div class="form-page">
            <header class="form-page__header">
                <a class="form-page__back" href=FACULTY_DASHBOARD_ROUTE>"Back to Dashboard"</a>
            </header>
            <div class="auth-card form-page__card">
                <h1>"Create New Assignment"</h1>
                <p class="auth-card__subtitle">"Fill in the details to create a new assignment for your students"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="title">"Assignment Title"</label>
                    <input
                        id="title"
                        class="auth-input"
                        placeholder="e.g., Database Design Project"
                        required=true
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <label for="course">"Course"</label>
                    <select
                        id="course"
                        class="auth-input"
                        required=true
                        prop:value=move || course.get()
                        on:change=move |ev| course.set(event_target_value(&ev))
                    >
                        <option value="" disabled=true>"Select course"</option>
                        {course_options}
                    </select>
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="auth-input"
                        rows="6"
                        placeholder="Provide detailed instructions for the assignment..."
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <label for="due-date">"Due Date"</label>
                    <input
                        id="due-date"
                        class="auth-input"
                        type="date"
                        required=true
                        prop:value=move || due_date.get()
                        on:input=move |ev| due_date.set(event_target_value(&ev))
                    />
                    <label for="max-points">"Maximum Points"</label>
                    <input
                        id="max-points"
                        class="auth-input"
                        type="number"
                        min="1"
                        required=true
                        prop:value=move || max_points.get()
                        on:input=move |ev| max_points.set(event_target_value(&ev))
                    />
                    <div class="form-page__actions">
                        <button class="form-page__cancel" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="auth-button" type="submit" disabled=move || created.get()>
                            "Create Assignment"
                        </button>
                    </div>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
