//! Session domain module.
//!
//! - `store`: `SessionStore` persistence trait and `TokenSource`
//! - `service`: `SessionService`, the injected handle views share

mod service;
mod store;

pub use service::SessionService;
pub use store::{SessionStore, TokenSource};
