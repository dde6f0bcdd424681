//! Delete confirmation state machine.

use crate::api::BlogApi;
use crate::blog::BlogRecord;
use crate::collection::Refresh;
use crate::notice::{Failure, Notice};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Hidden,
    Confirming(BlogRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    /// The call failed; the confirmation stays up.
    Failed,
    /// Confirm requested with nothing pending.
    NothingToDelete,
}

#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    state: DeleteState,
    alert: Option<Notice>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.state, DeleteState::Confirming(_))
    }

    pub fn target(&self) -> Option<&BlogRecord> {
        match &self.state {
            DeleteState::Hidden => None,
            DeleteState::Confirming(record) => Some(record),
        }
    }

    /// Question shown while confirming.
    pub fn prompt(&self) -> Option<String> {
        self.target().map(|record| {
            format!(
                "Are you sure you want to delete the blog titled \"{}\"?",
                record.title
            )
        })
    }

    pub fn request(&mut self, record: &BlogRecord) {
        self.state = DeleteState::Confirming(record.clone());
        self.alert = None;
    }

    pub fn cancel(&mut self) {
        self.state = DeleteState::Hidden;
    }

    /// Takes the pending failure alert, if any. Alerts are shown once.
    pub fn take_alert(&mut self) -> Option<Notice> {
        self.alert.take()
    }

    /// Deletes the pending target.
    ///
    /// Success hides the confirmation, clears the target and asks `refresh`
    /// once. Failure keeps the confirmation up and raises an alert.
    pub async fn confirm(&mut self, api: &dyn BlogApi, refresh: &dyn Refresh) -> DeleteOutcome {
        let id = match &self.state {
            DeleteState::Hidden => return DeleteOutcome::NothingToDelete,
            DeleteState::Confirming(record) => record.id.clone(),
        };

        match api.delete_blog(&id).await {
            Ok(()) => {
                self.state = DeleteState::Hidden;
                self.alert = None;
                refresh.refresh().await;
                DeleteOutcome::Deleted(id)
            }
            Err(e) => {
                tracing::warn!("Failed to delete blog {}: {}", id, e);
                self.alert = Some(Failure::DeleteFailure.into());
                DeleteOutcome::Failed
            }
        }
    }
}
