//! Session service shared by every view.

use std::sync::Arc;

use tokio::sync::watch;

use super::store::{SessionStore, TokenSource};
use crate::error::Result;

/// Single point of access to the signed-in state.
///
/// Wraps a [`SessionStore`] and publishes presence changes on a `watch`
/// channel so views can re-render on login and logout instead of polling
/// storage.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    presence: watch::Sender<bool>,
}

impl SessionService {
    /// Creates the service and seeds the presence flag from storage.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let initial = Self::read_token(store.as_ref()).is_some();
        let (presence, _) = watch::channel(initial);
        Self { store, presence }
    }

    /// True iff a credential is currently persisted.
    pub fn has_session(&self) -> bool {
        let present = Self::read_token(self.store.as_ref()).is_some();
        // Keep subscribers in step with out-of-band store changes.
        self.presence.send_if_modified(|current| {
            let changed = *current != present;
            *current = present;
            changed
        });
        present
    }

    /// Persists the credential, overwriting any prior value.
    ///
    /// An empty credential counts as signed out, same as for `has_session`.
    pub fn set_session(&self, token: &str) -> Result<()> {
        self.store.save(token)?;
        let present = !token.is_empty();
        if present {
            tracing::info!("Session established");
        } else {
            tracing::warn!("Stored an empty session credential");
        }
        self.presence.send_replace(present);
        Ok(())
    }

    /// Removes the credential.
    pub fn clear_session(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("Session cleared");
        self.presence.send_replace(false);
        Ok(())
    }

    /// Subscribes to presence changes (`true` = signed in).
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.presence.subscribe()
    }

    fn read_token(store: &dyn SessionStore) -> Option<String> {
        match store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read session credential: {}", e);
                None
            }
        }
    }
}

impl TokenSource for SessionService {
    fn token(&self) -> Option<String> {
        Self::read_token(self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InkwellError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CellStore {
        token: Mutex<Option<String>>,
        fail_writes: bool,
    }

    impl SessionStore for CellStore {
        fn load(&self) -> Result<Option<String>> {
            Ok(self.token.lock().unwrap().clone())
        }

        fn save(&self, token: &str) -> Result<()> {
            if self.fail_writes {
                return Err(InkwellError::storage("read-only"));
            }
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    #[test]
    fn test_set_and_clear_session() {
        let service = SessionService::new(Arc::new(CellStore::default()));
        assert!(!service.has_session());

        service.set_session("abc").unwrap();
        assert!(service.has_session());
        assert_eq!(service.token(), Some("abc".to_string()));

        service.set_session("def").unwrap();
        assert_eq!(service.token(), Some("def".to_string()));

        service.clear_session().unwrap();
        assert!(!service.has_session());
        assert_eq!(service.token(), None);
    }

    #[test]
    fn test_presence_seeded_from_store() {
        let store = CellStore::default();
        *store.token.lock().unwrap() = Some("persisted".to_string());
        let service = SessionService::new(Arc::new(store));
        assert!(*service.subscribe().borrow());
        assert!(service.has_session());
    }

    #[test]
    fn test_subscribers_observe_transitions() {
        let service = SessionService::new(Arc::new(CellStore::default()));
        let mut rx = service.subscribe();
        assert!(!*rx.borrow_and_update());

        service.set_session("abc").unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());

        service.clear_session().unwrap();
        assert!(!*rx.borrow_and_update());
    }

    #[test]
    fn test_empty_token_publishes_signed_out() {
        let service = SessionService::new(Arc::new(CellStore::default()));
        let rx = service.subscribe();

        service.set_session("").unwrap();

        assert!(!*rx.borrow());
        assert!(!service.has_session());
        assert!(!*rx.borrow());
    }

    #[test]
    fn test_failed_save_leaves_session_absent() {
        let store = CellStore {
            fail_writes: true,
            ..Default::default()
        };
        let service = SessionService::new(Arc::new(store));
        assert!(service.set_session("abc").is_err());
        assert!(!service.has_session());
        assert!(!*service.subscribe().borrow());
    }
}
