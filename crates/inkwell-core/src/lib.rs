//! Core domain for the Inkwell blog client.
//!
//! Everything here is transport-agnostic: the HTTP client lives in
//! `inkwell-interaction`, durable storage in `inkwell-infrastructure`.

pub mod api;
pub mod auth;
pub mod blog;
pub mod collection;
pub mod config;
pub mod deletion;
pub mod editor;
pub mod error;
pub mod nav;
pub mod notice;
pub mod route;
pub mod session;

#[cfg(test)]
mod test_support;

pub use api::BlogApi;
pub use error::{ApiError, ApiResult, InkwellError, Result};
pub use notice::{Failure, Notice};
