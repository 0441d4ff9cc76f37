//! Access gate wrapping every routed view.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::net::api::ApiClient;
use crate::state::session::SessionContext;
use crate::util::auth::{gate_target, install_route_gate, install_unauthorized_redirect};
use crate::util::route::REDIRECT_PARAM;

/// Render `children` only while the current path is allowed for the current
/// session; otherwise navigate to where [`gate_target`] points.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let pathname = use_location().pathname;
    let query = use_query_map();
    let return_to = Memo::new(move |_| query.with(|q| q.get(REDIRECT_PARAM)));

    install_route_gate(session, pathname, return_to, use_navigate());
    install_unauthorized_redirect(api, pathname, use_navigate());

    let allowed = move || gate_target(&pathname.get(), None, session.is_present()).is_none();

    view! {
        <Show when=allowed fallback=|| view! { <p class="route-gate">"Redirecting..."</p> }>
            {children()}
        </Show>
    }
}
