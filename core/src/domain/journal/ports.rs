use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    journal::{entities::JournalEntry, value_objects::RecordJournalEntryInput},
};

/// Session-scoped storage for journal history
#[cfg_attr(test, mockall::automock)]
pub trait JournalRepository: Send + Sync {
    fn prepend(
        &self,
        session_id: String,
        entry: JournalEntry,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Entries for the session, most recent first. Unknown sessions are empty.
    fn list(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<Vec<JournalEntry>, CoreError>> + Send;

    fn clear(&self, session_id: String) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait JournalService: Send + Sync {
    fn record_entry(
        &self,
        input: RecordJournalEntryInput,
    ) -> impl Future<Output = Result<JournalEntry, CoreError>> + Send;

    fn get_history(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<Vec<JournalEntry>, CoreError>> + Send;

    fn clear_history(
        &self,
        session_id: String,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
