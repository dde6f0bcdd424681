//! Pages produced by [`InkwellApp::navigate`](crate::InkwellApp::navigate).
//!
//! Each list page owns its own [`CollectionController`]; nothing is shared
//! between pages, so reopening a page always starts from a fresh fetch.

use std::sync::Arc;

use inkwell_core::api::BlogApi;
use inkwell_core::auth::AuthForm;
use inkwell_core::blog::{BlogRecord, Category, FilterCriteria, Scope};
use inkwell_core::collection::{CollectionController, CollectionSnapshot, FetchOutcome, StalePolicy};
use inkwell_core::deletion::{DeleteConfirmation, DeleteOutcome};
use inkwell_core::editor::{RecordEditor, SaveOutcome};
use inkwell_core::route::Route;

/// Shown in place of the list when a fetch succeeded with no records.
pub const EMPTY_STATE_MESSAGE: &str = "No blogs available.";

pub enum Page {
    Auth(AuthPage),
    Feed(FeedPage),
    MyBlogs(MyBlogsPage),
    NotFound(String),
}

impl Page {
    pub fn route(&self) -> Route {
        match self {
            Page::Auth(_) => Route::Login,
            Page::Feed(_) => Route::Feed,
            Page::MyBlogs(_) => Route::MyBlogs,
            Page::NotFound(path) => Route::NotFound(path.clone()),
        }
    }
}

#[derive(Debug, Default)]
pub struct AuthPage {
    pub form: AuthForm,
}

impl AuthPage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn empty_message(snapshot: &CollectionSnapshot) -> Option<&'static str> {
    snapshot.is_empty_state().then_some(EMPTY_STATE_MESSAGE)
}

/// Everyone's posts, filterable by category and author.
pub struct FeedPage {
    controller: Arc<CollectionController>,
    /// Edited freely; only reaches the controller through
    /// [`apply_draft_filter`](Self::apply_draft_filter).
    pub draft_filter: FilterCriteria,
}

impl FeedPage {
    /// Opens the page and performs the initial fetch.
    pub async fn open(api: Arc<dyn BlogApi>, policy: StalePolicy) -> Self {
        let controller = Arc::new(CollectionController::with_policy(Scope::Feed, api, policy));
        controller.refetch().await;
        Self {
            controller,
            draft_filter: FilterCriteria::default(),
        }
    }

    pub fn controller(&self) -> &Arc<CollectionController> {
        &self.controller
    }

    pub fn set_draft_category(&mut self, category: Option<Category>) {
        self.draft_filter.category = category;
    }

    pub fn set_draft_author(&mut self, author: Option<String>) {
        self.draft_filter.author = author;
    }

    pub async fn apply_draft_filter(&self) -> FetchOutcome {
        self.controller
            .apply_filter(self.draft_filter.clone().normalized())
            .await
    }

    pub async fn snapshot(&self) -> CollectionSnapshot {
        self.controller.snapshot().await
    }

    pub async fn empty_message(&self) -> Option<&'static str> {
        empty_message(&self.snapshot().await)
    }
}

/// The signed-in user's own posts, with create, edit and delete.
pub struct MyBlogsPage {
    api: Arc<dyn BlogApi>,
    controller: Arc<CollectionController>,
    pub draft_filter: FilterCriteria,
    pub editor: RecordEditor,
    pub deleter: DeleteConfirmation,
}

impl MyBlogsPage {
    /// Opens the page and performs the initial fetch.
    pub async fn open(api: Arc<dyn BlogApi>, policy: StalePolicy) -> Self {
        let controller = Arc::new(CollectionController::with_policy(
            Scope::Mine,
            api.clone(),
            policy,
        ));
        controller.refetch().await;
        Self {
            api,
            controller,
            draft_filter: FilterCriteria::default(),
            editor: RecordEditor::new(),
            deleter: DeleteConfirmation::new(),
        }
    }

    pub fn controller(&self) -> &Arc<CollectionController> {
        &self.controller
    }

    /// Author filtering is not offered here, so only the category is kept.
    pub fn set_draft_category(&mut self, category: Option<Category>) {
        self.draft_filter.category = category;
    }

    pub async fn apply_draft_filter(&self) -> FetchOutcome {
        self.controller
            .apply_filter(self.draft_filter.clone().for_scope(Scope::Mine))
            .await
    }

    pub async fn snapshot(&self) -> CollectionSnapshot {
        self.controller.snapshot().await
    }

    pub async fn empty_message(&self) -> Option<&'static str> {
        empty_message(&self.snapshot().await)
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Opens the editor on a loaded record. Returns the record, or `None`
    /// when `id` is not in the current list.
    pub async fn open_edit(&mut self, id: &str) -> Option<BlogRecord> {
        let record = self.controller.find(id).await?;
        self.editor.open_edit(&record);
        Some(record)
    }

    /// Saves the editor draft; a success refetches this page's list.
    pub async fn save(&mut self) -> SaveOutcome {
        self.editor
            .save(self.api.as_ref(), self.controller.as_ref())
            .await
    }

    /// Asks for confirmation before deleting a loaded record.
    pub async fn request_delete(&mut self, id: &str) -> Option<BlogRecord> {
        let record = self.controller.find(id).await?;
        self.deleter.request(&record);
        Some(record)
    }

    pub fn cancel_delete(&mut self) {
        self.deleter.cancel();
    }

    /// Deletes the record awaiting confirmation; a success refetches.
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        self.deleter
            .confirm(self.api.as_ref(), self.controller.as_ref())
            .await
    }
}
