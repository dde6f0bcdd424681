//! In-memory doubles shared by the unit tests of this crate.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::BlogApi;
use crate::blog::{BlogFields, BlogRecord, Category, FilterCriteria};
use crate::collection::Refresh;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Signup(String),
    ListBlogs(FilterCriteria),
    ListMyBlogs(FilterCriteria),
    Create(BlogFields),
    Update(String, BlogFields),
    Delete(String),
}

/// Backend double holding records in memory and recording every call.
#[derive(Default)]
pub struct StubApi {
    pub records: Mutex<Vec<BlogRecord>>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_lists: AtomicBool,
    pub fail_writes: AtomicBool,
    pub reject_login: AtomicBool,
    pub reject_signup: AtomicBool,
    next_id: AtomicUsize,
}

impl StubApi {
    pub fn with_records(records: Vec<BlogRecord>) -> Self {
        let stub = Self::default();
        *stub.records.lock().unwrap() = records;
        stub
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn list(&self, filter: &FilterCriteria, author_filter: bool) -> ApiResult<Vec<BlogRecord>> {
        if self.fail_lists.load(Ordering::SeqCst) {
            return Err(ApiError::server(500, "boom"));
        }
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| filter.category.is_none() || r.category == filter.category)
            .filter(|r| {
                !author_filter
                    || filter
                        .author
                        .as_deref()
                        .is_none_or(|author| r.author == author)
            })
            .cloned()
            .collect())
    }

    fn check_writes(&self) -> ApiResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ApiError::network("connection reset"));
        }
        Ok(())
    }
}

#[async_trait]
impl BlogApi for StubApi {
    async fn login(&self, email: &str, _password: &str) -> ApiResult<String> {
        self.record(Call::Login(email.to_string()));
        if self.reject_login.load(Ordering::SeqCst) {
            return Err(ApiError::InvalidCredentials);
        }
        Ok(format!("token-for-{}", email))
    }

    async fn signup(&self, _name: &str, email: &str, _password: &str) -> ApiResult<()> {
        self.record(Call::Signup(email.to_string()));
        if self.reject_signup.load(Ordering::SeqCst) {
            return Err(ApiError::EmailInUse);
        }
        Ok(())
    }

    async fn list_blogs(&self, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>> {
        self.record(Call::ListBlogs(filter.clone()));
        self.list(filter, true)
    }

    async fn list_my_blogs(&self, filter: &FilterCriteria) -> ApiResult<Vec<BlogRecord>> {
        self.record(Call::ListMyBlogs(filter.clone()));
        self.list(filter, false)
    }

    async fn create_blog(&self, fields: &BlogFields) -> ApiResult<BlogRecord> {
        self.record(Call::Create(fields.clone()));
        self.check_writes()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 100;
        let created = blog(&id.to_string(), &fields.title, fields.category);
        let created = BlogRecord {
            content: fields.content.clone(),
            ..created
        };
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_blog(&self, id: &str, fields: &BlogFields) -> ApiResult<BlogRecord> {
        self.record(Call::Update(id.to_string(), fields.clone()));
        self.check_writes()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::server(404, "not found"))?;
        record.title = fields.title.clone();
        record.category = fields.category;
        record.content = fields.content.clone();
        Ok(record.clone())
    }

    async fn delete_blog(&self, id: &str) -> ApiResult<()> {
        self.record(Call::Delete(id.to_string()));
        self.check_writes()?;
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

/// Counts refresh requests instead of fetching.
#[derive(Default)]
pub struct CountingRefresh {
    pub count: AtomicUsize,
}

impl CountingRefresh {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Refresh for CountingRefresh {
    async fn refresh(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn blog(id: &str, title: &str, category: Option<Category>) -> BlogRecord {
    BlogRecord {
        id: id.to_string(),
        title: title.to_string(),
        category,
        author: "ada".to_string(),
        content: format!("{} body", title),
    }
}
