//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`.

pub mod assignment_submit;
pub mod create_assignment;
pub mod dashboard;
pub mod index;
pub mod login;
pub mod not_found;
pub mod register;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const STUDENT_DASHBOARD_ROUTE: &str = "/student/dashboard";
pub const FACULTY_DASHBOARD_ROUTE: &str = "/faculty/dashboard";
pub const STUDENT_ASSIGNMENT_ROUTE: &str = "/student/assignment";
pub const CREATE_ASSIGNMENT_ROUTE: &str = "/faculty/create-assignment";

/// Pause between a form's success notice and the return to its dashboard.
pub const RETURN_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

/// Submission page for assignment `id`.
pub fn assignment_route(id: u32) -> String {
    format!("{STUDENT_ASSIGNMENT_ROUTE}/{id}")
}
