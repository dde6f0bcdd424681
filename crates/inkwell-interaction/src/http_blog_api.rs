//! HttpBlogApi - REST implementation of [`BlogApi`].
//!
//! Talks to the blog backend under `<base>/api/v1`. The session credential is
//! read from a [`TokenSource`] on every call, so a login or logout is picked
//! up without rebuilding the client.

use async_trait::async_trait;
use inkwell_core::api::BlogApi;
use inkwell_core::blog::{BlogFields, BlogRecord, FilterCriteria, Scope};
use inkwell_core::config::ClientConfig;
use inkwell_core::error::{ApiError, ApiResult};
use inkwell_core::session::TokenSource;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<BlogRecord>,
}

/// Write endpoints answer with the record either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordResponse {
    Data { data: BlogRecord },
    Blog { blog: BlogRecord },
    Bare(BlogRecord),
}

impl RecordResponse {
    fn into_record(self) -> BlogRecord {
        match self {
            RecordResponse::Data { data } => data,
            RecordResponse::Blog { blog } => blog,
            RecordResponse::Bare(record) => record,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// [`BlogApi`] over HTTP.
#[derive(Clone)]
pub struct HttpBlogApi {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl HttpBlogApi {
    /// Creates a client with reqwest defaults.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Self {
        Self::with_client(Client::new(), base_url, tokens)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenSource>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            tokens,
        }
    }

    /// Creates a client honouring the configured base URL and timeout.
    pub fn from_config(config: &ClientConfig, tokens: Arc<dyn TokenSource>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config.base_url(), tokens))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// URL of a single record, with `id` percent-encoded as one segment.
    fn record_url(&self, id: &str) -> ApiResult<Url> {
        let mut url = Url::parse(&self.url("/blogs"))
            .map_err(|e| ApiError::network(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::network("API URL cannot carry a path"))?
            .push(id);
        Ok(url)
    }

    /// Attaches the bearer credential when one is stored.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    }

    /// Sends and turns any non-success status into [`ApiError::Server`].
    async fn send_ok(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = self.send(request).await?;
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        Err(ApiError::server(status.as_u16(), error_message(response).await))
    }

    async fn list(&self, path: &str, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>> {
        let url = self.url(path);
        let pairs = filter.query_pairs();
        tracing::debug!(%url, ?pairs, "GET blogs");

        let mut request = self.client.get(&url);
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        let response = self.send_ok(self.authorize(request)).await?;
        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;
        Ok(body.data)
    }

    /// Decodes a write response, falling back to the submitted fields when
    /// the backend's body does not carry a record.
    async fn written_record(
        response: Response,
        id: &str,
        fields: &BlogFields,
    ) -> ApiResult<BlogRecord> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        match serde_json::from_slice::<RecordResponse>(&bytes) {
            Ok(body) => Ok(body.into_record()),
            Err(e) => {
                tracing::warn!("Write succeeded but response had no record: {}", e);
                Ok(BlogRecord {
                    id: id.to_string(),
                    title: fields.title.clone(),
                    category: fields.category,
                    author: String::new(),
                    content: fields.content.clone(),
                })
            }
        }
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.message,
        Err(_) if text.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => text,
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let url = self.url("/auth/login");
        tracing::debug!(%url, "POST login");

        let response = self
            .send(self.client.post(&url).json(&LoginRequest { email, password }))
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body: TokenResponse = response
                    .json()
                    .await
                    .map_err(|e| ApiError::decode(e.to_string()))?;
                Ok(body.token)
            }
            StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::NOT_FOUND => Err(ApiError::InvalidCredentials),
            status => Err(ApiError::server(status.as_u16(), error_message(response).await)),
        }
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> ApiResult<()> {
        let url = self.url("/auth/signup");
        tracing::debug!(%url, "POST signup");

        let response = self
            .send(self.client.post(&url).json(&SignupRequest {
                name,
                email,
                password,
            }))
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(ApiError::EmailInUse),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::Validation(error_message(response).await))
            }
            status => Err(ApiError::server(status.as_u16(), error_message(response).await)),
        }
    }

    async fn list_blogs(&self, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>> {
        let filter = filter.clone().for_scope(Scope::Feed);
        self.list("/blogs", &filter).await
    }

    async fn list_my_blogs(&self, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>> {
        let filter = filter.clone().for_scope(Scope::Mine);
        self.list("/blogs/my", &filter).await
    }

    async fn create_blog(&self, fields: &BlogFields) -> ApiResult<BlogRecord> {
        let url = self.url("/blogs");
        tracing::debug!(%url, "POST blog");
        let response = self
            .send_ok(self.authorize(self.client.post(&url).json(fields)))
            .await?;
        Self::written_record(response, "", fields).await
    }

    async fn update_blog(&self, id: &str, fields: &BlogFields) -> ApiResult<BlogRecord> {
        let url = self.record_url(id)?;
        tracing::debug!(%url, "PUT blog");
        let response = self
            .send_ok(self.authorize(self.client.put(url).json(fields)))
            .await?;
        Self::written_record(response, id, fields).await
    }

    async fn delete_blog(&self, id: &str) -> ApiResult<()> {
        let url = self.record_url(id)?;
        tracing::debug!(%url, "DELETE blog");
        self.send_ok(self.authorize(self.client.delete(url))).await?;
        Ok(())
    }
}
