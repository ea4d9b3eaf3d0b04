//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::HOME_ROUTE;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    log::debug!("404: no route for {}", location.pathname.get_untracked());

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="not-found__title">"Oops! Page not found"</p>
            <p>"The page you're looking for doesn't exist."</p>
            <a class="auth-button" href=HOME_ROUTE>"Return to Home"</a>
        </div>
    }
}
