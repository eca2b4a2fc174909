use std::sync::Arc;

use crate::domain::{
    advisory::{ports::LLMClient, prompts::AdvisoryPrompts},
    journal::ports::JournalRepository,
};

/// Application service wiring the advisory engine and the journal store
/// to their infrastructure adapters.
#[derive(Clone)]
pub struct Service<LLM, JR>
where
    LLM: LLMClient,
    JR: JournalRepository,
{
    pub(crate) llm_client: LLM,
    pub(crate) journal_repository: JR,
    pub(crate) prompts: Arc<AdvisoryPrompts>,
}

impl<LLM, JR> Service<LLM, JR>
where
    LLM: LLMClient,
    JR: JournalRepository,
{
    pub fn new(llm_client: LLM, journal_repository: JR) -> Self {
        Self {
            llm_client,
            journal_repository,
            prompts: Arc::new(AdvisoryPrompts::new()),
        }
    }
}
