//! Route table and access rules.
//!
//! DESIGN
//! ======
//! Access is a property of the route, and the redirect decision is a pure
//! function of (route, session present). The router shell asks
//! [`redirect_for`] and only refines where a signed-in visitor leaves a
//! sign-in view for, via [`post_login_target`].

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

pub const BROWSE_PATH: &str = "/browse";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADD_BOOK_PATH: &str = "/add";

/// Query key carrying the path a visitor was bounced from.
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Browse,
    Login,
    Register,
    Dashboard,
    AddBook,
    EditBook(i64),
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Sign-in screens; signed-in visitors are sent to the dashboard.
    AuthOnly,
    /// Requires a session; anonymous visitors are sent to login.
    Protected,
}

impl AppRoute {
    /// Match a pathname (no query string).
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Root,
            BROWSE_PATH => Self::Browse,
            LOGIN_PATH => Self::Login,
            REGISTER_PATH => Self::Register,
            DASHBOARD_PATH => Self::Dashboard,
            ADD_BOOK_PATH => Self::AddBook,
            _ => trimmed
                .strip_prefix("/edit/")
                .and_then(|id| id.parse::<i64>().ok())
                .map_or(Self::NotFound, Self::EditBook),
        }
    }

    #[must_use]
    pub const fn access(&self) -> Access {
        match self {
            Self::Root | Self::NotFound => Access::Public,
            Self::Login | Self::Register => Access::AuthOnly,
            Self::Browse | Self::Dashboard | Self::AddBook | Self::EditBook(_) => Access::Protected,
        }
    }
}

#[must_use]
pub fn edit_book_path(id: i64) -> String {
    format!("/edit/{id}")
}

/// Where to send a visitor to `path`, or `None` to render it.
#[must_use]
pub fn redirect_for(path: &str, has_session: bool) -> Option<String> {
    let route = AppRoute::parse(path);
    if route == AppRoute::Root {
        return Some(BROWSE_PATH.to_owned());
    }
    match (route.access(), has_session) {
        (Access::AuthOnly, true) => Some(DASHBOARD_PATH.to_owned()),
        (Access::Protected, false) => Some(login_path_for(path)),
        _ => None,
    }
}

/// Login URL remembering `origin` for the post-login return.
#[must_use]
pub fn login_path_for(origin: &str) -> String {
    if is_safe_return_path(origin) {
        format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", urlencoding::encode(origin))
    } else {
        LOGIN_PATH.to_owned()
    }
}

/// Destination once a sign-in view has a session, given the already decoded
/// `redirect` query value.
#[must_use]
pub fn post_login_target(redirect: Option<&str>) -> String {
    redirect
        .map(str::trim)
        .filter(|p| is_safe_return_path(p) && AppRoute::parse(path_only(p)).access() != Access::AuthOnly)
        .map_or_else(|| DASHBOARD_PATH.to_owned(), str::to_owned)
}

fn path_only(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// In-app absolute path; rejects scheme-relative and external URLs.
fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains("://") && !path.contains('\\')
}
