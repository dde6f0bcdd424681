//! Routes and the session-gated route guard.

use std::fmt;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const FEED_PATH: &str = "/blogs";
pub const MY_BLOGS_PATH: &str = "/my-blogs";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Feed,
    MyBlogs,
    NotFound(String),
}

impl Route {
    /// Parses a path. Trailing slashes and query strings are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Root,
            LOGIN_PATH => Route::Login,
            FEED_PATH => Route::Feed,
            MY_BLOGS_PATH => Route::MyBlogs,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Root => ROOT_PATH,
            Route::Login => LOGIN_PATH,
            Route::Feed => FEED_PATH,
            Route::MyBlogs => MY_BLOGS_PATH,
            Route::NotFound(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// Decides what a navigation to `path` does.
///
/// Signed out, everything except the login page redirects to login. Signed
/// in, the root redirects to the feed. Anything else renders as requested.
pub fn guard(path: &str, has_session: bool) -> RouteDecision {
    let route = Route::from_path(path);
    match (has_session, &route) {
        (false, Route::Login) => RouteDecision::Render(route),
        (false, _) => RouteDecision::Redirect(Route::Login),
        (true, Route::Root) => RouteDecision::Redirect(Route::Feed),
        (true, _) => RouteDecision::Render(route),
    }
}

/// Follows redirects until a route renders.
///
/// The guard's redirect targets always render on the next step, so this
/// terminates in at most two evaluations.
pub fn resolve(path: &str, has_session: bool) -> Route {
    let mut current = path.to_string();
    loop {
        match guard(&current, has_session) {
            RouteDecision::Render(route) => return route,
            RouteDecision::Redirect(target) => current = target.path().to_string(),
        }
    }
}
