//! Remote interaction layer: the HTTP client for the blog backend.

pub mod http_blog_api;

pub use http_blog_api::HttpBlogApi;
