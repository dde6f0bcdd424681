//! Session storage backends.

pub mod memory;
pub mod session_file;

pub use memory::MemorySessionStore;
pub use session_file::FileSessionStore;
