pub mod repositories;

pub use repositories::in_memory_journal_repository::InMemoryJournalRepository;
