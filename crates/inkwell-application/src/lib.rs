//! Application layer for Inkwell.
//!
//! Ties the session, the route guard and the per-page controllers together
//! into the pages a front end renders.

pub mod app;
pub mod pages;

pub use app::InkwellApp;
pub use pages::{AuthPage, EMPTY_STATE_MESSAGE, FeedPage, MyBlogsPage, Page};
