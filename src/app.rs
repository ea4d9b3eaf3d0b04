//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{
    assignment_submit::AssignmentSubmitPage,
    create_assignment::CreateAssignmentPage,
    dashboard::{FacultyDashboardPage, StudentDashboardPage},
    index::IndexPage,
    login::LoginPage,
    not_found::NotFoundPage,
    register::RegisterPage,
};

/// Root application component.
///
/// Resolves backend URLs once and provides them to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_environment());

    view! {
        <Title text="Assignment Portal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("student"), StaticSegment("dashboard")) view=StudentDashboardPage/>
                <Route
                    path=(StaticSegment("student"), StaticSegment("assignment"), ParamSegment("id"))
                    view=AssignmentSubmitPage
                />
                <Route path=(StaticSegment("faculty"), StaticSegment("dashboard")) view=FacultyDashboardPage/>
                <Route
                    path=(StaticSegment("faculty"), StaticSegment("create-assignment"))
                    view=CreateAssignmentPage
                />
            </Routes>
        </Router>
    }
}
