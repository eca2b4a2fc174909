use crate::{
    domain::common::{NutrimindConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{journal::InMemoryJournalRepository, llm::GeminiLLMClient},
};

pub type NutrimindService = Service<GeminiLLMClient, InMemoryJournalRepository>;

pub fn create_service(config: NutrimindConfig) -> Result<NutrimindService, CoreError> {
    let llm_client = GeminiLLMClient::new(config.llm)?;
    let journal_repository = InMemoryJournalRepository::with_limits(
        config.journal.max_sessions,
        config.journal.max_entries_per_session,
    );

    Ok(Service::new(llm_client, journal_repository))
}
