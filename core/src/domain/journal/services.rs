use tracing::info;

use crate::domain::{
    advisory::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    journal::{
        entities::JournalEntry,
        ports::{JournalRepository, JournalService},
        value_objects::RecordJournalEntryInput,
    },
};

impl<LLM, JR> JournalService for Service<LLM, JR>
where
    LLM: LLMClient,
    JR: JournalRepository,
{
    async fn record_entry(&self, input: RecordJournalEntryInput) -> Result<JournalEntry, CoreError> {
        let entry = JournalEntry::new(input.entry, input.recommendation);

        self.journal_repository
            .prepend(input.session_id, entry.clone())
            .await?;

        info!(entry_id = %entry.id, mood = %entry.mood, "journal entry recorded");
        Ok(entry)
    }

    async fn get_history(&self, session_id: String) -> Result<Vec<JournalEntry>, CoreError> {
        self.journal_repository.list(session_id).await
    }

    async fn clear_history(&self, session_id: String) -> Result<usize, CoreError> {
        let removed = self.journal_repository.clear(session_id).await?;
        info!(removed, "journal history cleared");
        Ok(removed)
    }
}
