//! Session store trait.

use crate::error::Result;

/// Persistence backend for the session credential.
///
/// Holds at most one opaque token. Implementations must be durable when the
/// session is expected to survive a restart; the route guard re-derives the
/// signed-in state from here alone.
pub trait SessionStore: Send + Sync {
    /// Returns the stored credential, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Stores the credential, overwriting any previous one.
    fn save(&self, token: &str) -> Result<()>;

    /// Removes the credential. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// Read access to the current bearer credential.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}
