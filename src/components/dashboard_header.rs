//! Dashboard header with greeting and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::LOGIN_ROUTE;
use crate::state::session::Session;

/// Title, greeting line, optional page actions, and a logout button that
/// clears the session and returns to `/login`.
#[component]
pub fn DashboardHeader(
    title: &'static str,
    greeting: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        let removed = Session::browser().logout();
        log::info!("logged out, cleared {removed} keys");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="dashboard-header">
            <div>
                <h1 class="dashboard-header__title">{title}</h1>
                <p class="dashboard-header__greeting">{greeting}</p>
            </div>
            <div class="dashboard-header__actions">
                {children.map(|c| c())}
                <button class="dashboard-header__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
