//! Site header with brand link, navigation and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visible on every route. Navigation entries follow session presence, and
//! logout goes through `SessionContext` so the epoch bump resets any
//! user-scoped lists. Leaving a protected page after logout is the route
//! gate's job.

use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::util::route::{ADD_BOOK_PATH, BROWSE_PATH, DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let email = move || session.session().map(|s| s.email).unwrap_or_default();

    let on_logout = move |_| session.logout();

    view! {
        <header class="site-header">
            <a href=BROWSE_PATH class="site-header__brand">
                "Digital Book Swap"
            </a>
            <nav class="site-header__nav">
                <a href=BROWSE_PATH class="site-header__link">
                    "Browse Books"
                </a>
                <Show
                    when=move || session.is_present()
                    fallback=|| {
                        view! {
                            <a href=LOGIN_PATH class="site-header__link">
                                "Login"
                            </a>
                            <a href=REGISTER_PATH class="site-header__link site-header__link--primary">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a href=DASHBOARD_PATH class="site-header__link">
                        "Dashboard"
                    </a>
                    <a href=ADD_BOOK_PATH class="site-header__link">
                        "Add Book"
                    </a>
                    <span class="site-header__user" title=email>
                        {email}
                    </span>
                    <button class="site-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
