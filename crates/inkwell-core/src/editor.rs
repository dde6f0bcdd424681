//! Record editor state machine.
//!
//! Governs the create/edit dialog. Exactly one draft exists at a time and
//! edits touch only the draft; the target record is never mutated locally.

use crate::api::BlogApi;
use crate::blog::{BlogFields, BlogRecord, Category};
use crate::collection::Refresh;
use crate::notice::{Failure, Notice};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Closed,
    CreatingNew(BlogFields),
    Editing {
        target: BlogRecord,
        draft: BlogFields,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(BlogRecord),
    Updated(BlogRecord),
    /// The call failed; the dialog stays open with its draft.
    Failed,
    /// Save requested while closed.
    NothingToSave,
}

#[derive(Debug, Default)]
pub struct RecordEditor {
    state: EditorState,
    notice: Option<Notice>,
}

impl RecordEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Closed)
    }

    /// Dialog heading for the current mode.
    pub fn heading(&self) -> Option<&'static str> {
        match self.state {
            EditorState::Closed => None,
            EditorState::CreatingNew(_) => Some("Create Blog"),
            EditorState::Editing { .. } => Some("Edit Blog"),
        }
    }

    /// Opens an empty draft, replacing any open one.
    pub fn open_create(&mut self) {
        self.state = EditorState::CreatingNew(BlogFields::default());
        self.notice = None;
    }

    /// Opens a draft copied from `record`, replacing any open one.
    pub fn open_edit(&mut self, record: &BlogRecord) {
        self.state = EditorState::Editing {
            target: record.clone(),
            draft: BlogFields::from(record),
        };
        self.notice = None;
    }

    /// Closes the dialog and drops the draft.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
        self.notice = None;
    }

    pub fn draft(&self) -> Option<&BlogFields> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::CreatingNew(draft) | EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut BlogFields> {
        match &mut self.state {
            EditorState::Closed => None,
            EditorState::CreatingNew(draft) | EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.title = title.into();
        }
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        if let Some(draft) = self.draft_mut() {
            draft.category = category;
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            draft.content = content.into();
        }
    }

    /// Save-failure notice from the last attempt, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Submits the draft.
    ///
    /// On success the dialog closes and `refresh` is asked exactly once. On
    /// failure nothing else changes: the draft stays, no refresh happens and
    /// the save-failure notice is raised.
    pub async fn save(&mut self, api: &dyn BlogApi, refresh: &dyn Refresh) -> SaveOutcome {
        let result = match &self.state {
            EditorState::Closed => return SaveOutcome::NothingToSave,
            EditorState::CreatingNew(draft) => {
                api.create_blog(draft).await.map(SaveOutcome::Created)
            }
            EditorState::Editing { target, draft } => api
                .update_blog(&target.id, draft)
                .await
                .map(SaveOutcome::Updated),
        };

        match result {
            Ok(outcome) => {
                self.state = EditorState::Closed;
                self.notice = None;
                refresh.refresh().await;
                outcome
            }
            Err(e) => {
                tracing::warn!("Failed to save blog: {}", e);
                self.notice = Some(Failure::SaveFailure.into());
                SaveOutcome::Failed
            }
        }
    }
}
