//! Remote blog API interface.
//!
//! One method per backend endpoint. Implementations attach the session
//! credential to every authenticated call; the backend alone decides whether
//! it is valid.

use async_trait::async_trait;

use crate::blog::{BlogFields, BlogRecord, FilterCriteria};
use crate::error::ApiResult;

#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Exchanges credentials for a session token.
    async fn login(&self, email: &str, password: &str) -> ApiResult<String>;

    /// Registers a new account. Does not sign in.
    async fn signup(&self, name: &str, email: &str, password: &str) -> ApiResult<()>;

    /// Lists the public feed. Category and author are both honoured.
    async fn list_blogs(&self, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>>;

    /// Lists the signed-in user's posts. Only the category is honoured.
    async fn list_my_blogs(&self, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>>;

    async fn create_blog(&self, fields: &BlogFields) -> ApiResult<BlogRecord>;

    async fn update_blog(&self, id: &str, fields: &BlogFields) -> ApiResult<BlogRecord>;

    async fn delete_blog(&self, id: &str) -> ApiResult<()>;
}
