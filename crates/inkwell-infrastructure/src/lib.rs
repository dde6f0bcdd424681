//! Infrastructure for the Inkwell client: paths, configuration and durable
//! session storage.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::InkwellPaths;
pub use crate::storage::{FileSessionStore, MemorySessionStore};
