pub mod in_memory_journal_repository;
