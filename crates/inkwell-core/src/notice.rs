//! User-facing notices.
//!
//! Every failure collapses to one fixed message per category. The detailed
//! [`ApiError`](crate::error::ApiError) is logged, never shown.

use std::fmt;

/// Categories of failure the user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    /// Login rejected.
    AuthFailure,
    /// Signup rejected (email in use or validation, not distinguished).
    SignupConflict,
    /// Signup password and confirmation differ.
    PasswordMismatch,
    /// Any list fetch failed.
    FetchFailure,
    /// Create or update failed.
    SaveFailure,
    /// Delete failed.
    DeleteFailure,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Failure::AuthFailure => "Invalid username or password. Please try again.",
            Failure::SignupConflict => "Signup failed. Email might already be in use.",
            Failure::PasswordMismatch => "Passwords do not match.",
            Failure::FetchFailure => "Failed to load blogs. Please try again later.",
            Failure::SaveFailure => "Failed to save blog.",
            Failure::DeleteFailure => "Failed to delete blog.",
        }
    }

    /// Save and delete failures interrupt the user as an alert; the rest
    /// render inline next to the form or list.
    pub fn is_alert(self) -> bool {
        matches!(self, Failure::SaveFailure | Failure::DeleteFailure)
    }
}

/// A message surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Failure(Failure),
    SignupSucceeded,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Failure(failure) => failure.message(),
            Notice::SignupSucceeded => "Signup successful. Please log in.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }

    pub fn is_alert(&self) -> bool {
        match self {
            Notice::Failure(failure) => failure.is_alert(),
            Notice::SignupSucceeded => false,
        }
    }
}

impl From<Failure> for Notice {
    fn from(failure: Failure) -> Self {
        Notice::Failure(failure)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_write_failures_are_alerts() {
        assert!(Notice::from(Failure::SaveFailure).is_alert());
        assert!(Notice::from(Failure::DeleteFailure).is_alert());
        assert!(!Notice::from(Failure::FetchFailure).is_alert());
        assert!(!Notice::SignupSucceeded.is_alert());
    }

    #[test]
    fn test_display_uses_fixed_message() {
        assert_eq!(
            Notice::from(Failure::FetchFailure).to_string(),
            "Failed to load blogs. Please try again later."
        );
    }
}
