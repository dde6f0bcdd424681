pub mod auth;
pub mod blogs;
pub mod context;
pub mod render;
pub mod utils;
