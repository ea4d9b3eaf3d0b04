//! Public landing page.

use leptos::prelude::*;

use super::{LOGIN_ROUTE, REGISTER_ROUTE};

const FEATURES: &[(&str, &str)] = &[
    (
        "Assignment Management",
        "Create, submit, and track assignments. Faculty publish assignments and students submit their work.",
    ),
    (
        "Project Tracking",
        "Monitor project progress through stages and milestones.",
    ),
    (
        "Collaboration",
        "Organized submission reviews and feedback between students and faculty.",
    ),
];

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1>"Assignment Submission & Project Tracking System"</h1>
                <p>
                    "A platform for managing academic assignments, tracking project progress, "
                    "and collaboration between students and faculty."
                </p>
                <div class="landing__actions">
                    <a class="auth-button" href=LOGIN_ROUTE>"Get Started"</a>
                    <a class="auth-button auth-button--outline" href=REGISTER_ROUTE>"Register"</a>
                </div>
            </section>
            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="landing__feature">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
