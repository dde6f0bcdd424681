//! Application shell.

use std::sync::Arc;

use anyhow::{Context, Result};
use inkwell_core::api::BlogApi;
use inkwell_core::auth::{AuthMode, AuthOutcome, Credentials};
use inkwell_core::collection::StalePolicy;
use inkwell_core::nav::{self, NavItem};
use inkwell_core::route::{self, LOGIN_PATH, Route};
use inkwell_core::session::SessionService;

use crate::pages::{AuthPage, FeedPage, MyBlogsPage, Page};

/// Owns the session and the API and turns paths into pages.
///
/// Every navigation goes through the route guard, so a page that needs a
/// session can never be opened without one.
pub struct InkwellApp {
    session: Arc<SessionService>,
    api: Arc<dyn BlogApi>,
    stale_policy: StalePolicy,
    current: Route,
}

impl InkwellApp {
    pub fn new(session: Arc<SessionService>, api: Arc<dyn BlogApi>) -> Self {
        Self {
            session,
            api,
            stale_policy: StalePolicy::default(),
            current: Route::Root,
        }
    }

    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }

    pub fn session(&self) -> &Arc<SessionService> {
        &self.session
    }

    pub fn has_session(&self) -> bool {
        self.session.has_session()
    }

    /// Route of the page most recently opened.
    pub fn current_route(&self) -> &Route {
        &self.current
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav::nav_items(self.has_session())
    }

    /// Opens the page for `path`, following guard redirects.
    pub async fn navigate(&mut self, path: &str) -> Page {
        let route = route::resolve(path, self.has_session());
        if Route::from_path(path) != route {
            tracing::debug!(from = path, to = %route, "Redirected");
        }
        self.current = route.clone();

        match route {
            Route::Login => Page::Auth(AuthPage::new()),
            Route::Root | Route::Feed => {
                Page::Feed(FeedPage::open(self.api.clone(), self.stale_policy).await)
            }
            Route::MyBlogs => {
                Page::MyBlogs(MyBlogsPage::open(self.api.clone(), self.stale_policy).await)
            }
            Route::NotFound(path) => Page::NotFound(path),
        }
    }

    /// Submits the auth page's form in its current mode.
    ///
    /// A successful login navigates and returns the new page; any other
    /// outcome leaves the caller on `page` with its notices updated.
    pub async fn submit_auth(&mut self, page: &mut AuthPage) -> Result<Option<Page>> {
        let outcome = page
            .form
            .submit(self.api.as_ref(), &self.session)
            .await
            .context("Failed to store session credential")?;

        match outcome {
            AuthOutcome::LoggedIn { redirect } => Ok(Some(self.navigate(redirect.path()).await)),
            AuthOutcome::SignedUp | AuthOutcome::Rejected => Ok(None),
        }
    }

    /// Logs in with `email` and `password`.
    ///
    /// Returns the feed on success, or the auth page carrying the error.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Page> {
        let mut page = AuthPage::new();
        page.form.credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
            ..Credentials::default()
        };

        match self.submit_auth(&mut page).await? {
            Some(next) => Ok(next),
            None => Ok(Page::Auth(page)),
        }
    }

    /// Registers an account. The returned page is back in login mode on
    /// success and carries the error otherwise.
    pub async fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthPage> {
        let mut page = AuthPage::new();
        if page.form.mode() == AuthMode::Login {
            page.form.toggle_mode();
        }
        page.form.credentials = Credentials {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };

        self.submit_auth(&mut page).await?;
        Ok(page)
    }

    /// Clears the session and returns to the login page.
    pub async fn logout(&mut self) -> Result<Page> {
        self.session
            .clear_session()
            .context("Failed to clear session credential")?;
        Ok(self.navigate(LOGIN_PATH).await)
    }
}
