//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components and the router shell apply identical redirect behavior:
//! access rules come from `util::route`, session presence from
//! `SessionContext`, and 401 redirects from the API gateway.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiClient;
use crate::state::session::SessionContext;
use crate::util::route::{Access, AppRoute, login_path_for, post_login_target, redirect_for};

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Where the gate sends a visitor to `path`, or `None` to render it.
///
/// A sign-in view that gains a session continues to the remembered
/// `return_to` origin, so login and registration never navigate themselves.
#[must_use]
pub fn gate_target(path: &str, return_to: Option<&str>, has_session: bool) -> Option<String> {
    let target = redirect_for(path, has_session)?;
    if has_session && AppRoute::parse(path).access() == Access::AuthOnly {
        return Some(post_login_target(return_to));
    }
    Some(target)
}

/// Re-evaluate access whenever the path, its `redirect` query value or the
/// session changes.
pub fn install_route_gate<F>(
    session: SessionContext,
    pathname: Memo<String>,
    return_to: Memo<Option<String>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if let Some(target) = gate_target(&path, return_to.get().as_deref(), session.is_present()) {
            navigate(&target, replace_history());
        }
    });
}

/// Send the visitor to login, remembering where they were, whenever the
/// gateway's 401 handler asks for it.
pub fn install_unauthorized_redirect<F>(api: ApiClient, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if api.login_requested() {
            api.clear_login_request();
            if let Some(target) = unauthorized_target(&pathname.get_untracked()) {
                navigate(&target, replace_history());
            }
        }
    });
}

/// Login URL for a 401 seen while on `path`; `None` once already on a sign-in
/// view, which the route gate may have reached first.
#[must_use]
pub fn unauthorized_target(path: &str) -> Option<String> {
    (AppRoute::parse(path).access() != Access::AuthOnly).then(|| login_path_for(path))
}
