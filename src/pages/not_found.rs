//! Static view for unmatched routes.

use leptos::prelude::*;

use crate::util::route::BROWSE_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a href=BROWSE_PATH>"Return to Home"</a>
        </div>
    }
}
