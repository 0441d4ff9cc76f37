//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds every shared context once per mount: configuration, the notice
//! queue, the session, the API gateway and the owner's listings cache. The
//! session liveness checks and the listings reset are installed here so they
//! live exactly as long as the app.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::header::SiteHeader;
use crate::components::notice_stack::NoticeStack;
use crate::components::route_gate::RouteGate;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::book_form::{AddBookPage, EditBookPage};
use crate::pages::browse::BrowsePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::state::dashboard::{MyBooks, install_listing_reset};
use crate::state::notice::NoticeState;
use crate::state::session::{SessionContext, install_session_liveness};
use crate::util::route::BROWSE_PATH;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    leptos::logging::log!("api base url: {}", config.api_base_url);

    let notices = RwSignal::new(NoticeState::default());
    let session = SessionContext::restore(&config, notices);
    let api = ApiClient::new(config.clone(), session);
    let my_books = RwSignal::new(MyBooks::new(config.dashboard_page_size));
    let notice_lifetime = config.notice_lifetime_ms;
    let check_interval = config.session_check_interval;

    provide_context(StoredValue::new(config));
    provide_context(notices);
    provide_context(session);
    provide_context(api);
    provide_context(my_books);

    install_session_liveness(session, check_interval);
    install_listing_reset(session, my_books);

    view! {
        <Title text="Digital Book Swap"/>

        <Router>
            <SiteHeader/>
            <NoticeStack lifetime_ms=notice_lifetime/>
            <main class="app-main">
                <RouteGate>
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=BROWSE_PATH/> }/>
                        <Route path=StaticSegment("browse") view=BrowsePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("add") view=AddBookPage/>
                        <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditBookPage/>
                    </Routes>
                </RouteGate>
            </main>
        </Router>
    }
}
