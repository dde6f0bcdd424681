//! Resource collection controller.
//!
//! Holds the record list for one [`Scope`] and refetches it whenever the
//! applied filter changes or a write asks for a refresh. The list is always
//! replaced wholesale with whatever the backend returned.
//!
//! Fetches are not cancelled and may complete out of order. Each fetch is
//! tagged with a monotonic request id and the filter generation it was issued
//! under; [`StalePolicy`] decides what happens to a completion that has been
//! overtaken.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, watch};

use crate::api::BlogApi;
use crate::blog::{BlogRecord, FilterCriteria, Scope};
use crate::notice::{Failure, Notice};

/// What to do with a fetch that completes after a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Drop completions issued before the latest applied fetch or under a
    /// filter that has since been replaced.
    #[default]
    DiscardStale,
    /// Apply every completion in arrival order. A slow response for an old
    /// filter can overwrite a newer list.
    LastWriteWins,
}

/// Result of a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Records replaced; carries the new record count.
    Applied(usize),
    /// Fetch failed; previous records kept and the error notice set.
    Failed,
    /// Completion was overtaken and ignored.
    Stale,
}

/// Something that can be asked to reload its data after a write.
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self);
}

/// Point-in-time copy of the controller state, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSnapshot {
    pub scope: Scope,
    pub applied_filter: FilterCriteria,
    pub records: Vec<BlogRecord>,
    pub last_error: Option<Notice>,
}

impl CollectionSnapshot {
    /// Nothing to show and nothing went wrong.
    pub fn is_empty_state(&self) -> bool {
        self.records.is_empty() && self.last_error.is_none()
    }
}

#[derive(Debug, Default)]
struct CollectionState {
    applied_filter: FilterCriteria,
    records: Vec<BlogRecord>,
    last_error: Option<Notice>,
    /// Bumped on every applied filter change.
    generation: u64,
    /// Request id of the last completion that touched `records`/`last_error`.
    last_completed: u64,
}

pub struct CollectionController {
    scope: Scope,
    api: Arc<dyn BlogApi>,
    policy: StalePolicy,
    state: RwLock<CollectionState>,
    filter_tx: watch::Sender<FilterCriteria>,
    next_request: AtomicU64,
}

impl CollectionController {
    pub fn new(scope: Scope, api: Arc<dyn BlogApi>) -> Self {
        Self::with_policy(scope, api, StalePolicy::default())
    }

    pub fn with_policy(scope: Scope, api: Arc<dyn BlogApi>, policy: StalePolicy) -> Self {
        let (filter_tx, _) = watch::channel(FilterCriteria::default());
        Self {
            scope,
            api,
            policy,
            state: RwLock::new(CollectionState::default()),
            filter_tx,
            next_request: AtomicU64::new(0),
        }
    }

    /// Replaces the applied filter and refetches immediately.
    pub async fn apply_filter(&self, filter: FilterCriteria) -> FetchOutcome {
        let filter = filter.for_scope(self.scope);
        {
            let mut state = self.state.write().await;
            state.applied_filter = filter.clone();
            state.generation += 1;
        }
        tracing::debug!(scope = ?self.scope, ?filter, "Filter applied");
        self.filter_tx.send_replace(filter);
        self.refetch().await
    }

    /// Fetches the scope's records with the applied filter.
    pub async fn refetch(&self) -> FetchOutcome {
        let request_id = self.next_request.fetch_add(1, Ordering::SeqCst) + 1;
        let (filter, generation) = {
            let state = self.state.read().await;
            (state.applied_filter.clone(), state.generation)
        };

        tracing::debug!(scope = ?self.scope, request_id, "Fetching blogs");
        let result = match self.scope {
            Scope::Feed => self.api.list_blogs(&filter).await,
            Scope::Mine => self.api.list_my_blogs(&filter).await,
        };

        let mut state = self.state.write().await;
        if self.policy == StalePolicy::DiscardStale
            && (request_id < state.last_completed || generation != state.generation)
        {
            tracing::debug!(
                scope = ?self.scope,
                request_id,
                last_completed = state.last_completed,
                "Discarding stale fetch completion"
            );
            return FetchOutcome::Stale;
        }
        state.last_completed = request_id;

        match result {
            Ok(records) => {
                let count = records.len();
                state.records = records;
                state.last_error = None;
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                tracing::warn!(scope = ?self.scope, "Failed to load blogs: {}", e);
                state.last_error = Some(Failure::FetchFailure.into());
                FetchOutcome::Failed
            }
        }
    }

    pub async fn records(&self) -> Vec<BlogRecord> {
        self.state.read().await.records.clone()
    }

    pub async fn applied_filter(&self) -> FilterCriteria {
        self.state.read().await.applied_filter.clone()
    }

    pub async fn last_error(&self) -> Option<Notice> {
        self.state.read().await.last_error
    }

    /// Finds a loaded record by id.
    pub async fn find(&self, id: &str) -> Option<BlogRecord> {
        self.state
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn snapshot(&self) -> CollectionSnapshot {
        let state = self.state.read().await;
        CollectionSnapshot {
            scope: self.scope,
            applied_filter: state.applied_filter.clone(),
            records: state.records.clone(),
            last_error: state.last_error,
        }
    }

    /// Subscribes to applied-filter changes.
    pub fn subscribe_filter(&self) -> watch::Receiver<FilterCriteria> {
        self.filter_tx.subscribe()
    }
}

#[async_trait]
impl Refresh for CollectionController {
    async fn refresh(&self) {
        self.refetch().await;
    }
}
