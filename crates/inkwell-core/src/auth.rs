//! Login / signup form.

use crate::api::BlogApi;
use crate::error::Result;
use crate::notice::{Failure, Notice};
use crate::route::Route;
use crate::session::SessionService;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session stored; navigate to `redirect`.
    LoggedIn { redirect: Route },
    /// Account created; the form is back in login mode.
    SignedUp,
    /// Rejected locally or by the backend; see the form's error.
    Rejected,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    mode: AuthMode,
    pub credentials: Credentials,
    error: Option<Notice>,
    success: Option<Notice>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn error(&self) -> Option<Notice> {
        self.error
    }

    pub fn success(&self) -> Option<Notice> {
        self.success
    }

    /// Switches between login and signup, clearing any messages.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.error = None;
        self.success = None;
    }

    pub async fn submit(
        &mut self,
        api: &dyn BlogApi,
        session: &SessionService,
    ) -> Result<AuthOutcome> {
        match self.mode {
            AuthMode::Login => self.submit_login(api, session).await,
            AuthMode::Signup => Ok(self.submit_signup(api).await),
        }
    }

    /// Exchanges the credentials for a token and stores it.
    ///
    /// Only a failure to persist the token is returned as an error; a
    /// rejected login is reported through the form.
    pub async fn submit_login(
        &mut self,
        api: &dyn BlogApi,
        session: &SessionService,
    ) -> Result<AuthOutcome> {
        let result = api
            .login(&self.credentials.email, &self.credentials.password)
            .await;
        match result {
            Ok(token) => {
                session.set_session(&token)?;
                self.error = None;
                Ok(AuthOutcome::LoggedIn {
                    redirect: Route::Feed,
                })
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                self.error = Some(Failure::AuthFailure.into());
                Ok(AuthOutcome::Rejected)
            }
        }
    }

    /// Registers the account after checking the password confirmation.
    pub async fn submit_signup(&mut self, api: &dyn BlogApi) -> AuthOutcome {
        let creds = &self.credentials;
        if creds.password != creds.confirm_password {
            self.error = Some(Failure::PasswordMismatch.into());
            return AuthOutcome::Rejected;
        }

        let result = api.signup(&creds.name, &creds.email, &creds.password).await;
        match result {
            Ok(()) => {
                self.mode = AuthMode::Login;
                self.error = None;
                self.success = Some(Notice::SignupSucceeded);
                AuthOutcome::SignedUp
            }
            Err(e) => {
                tracing::warn!("Signup failed: {}", e);
                self.error = Some(Failure::SignupConflict.into());
                AuthOutcome::Rejected
            }
        }
    }
}
