use std::{num::NonZeroUsize, sync::Arc};

use lru::LruCache;
use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    journal::{
        entities::JournalEntry,
        history::{DEFAULT_MAX_ENTRIES, JournalHistory},
        ports::JournalRepository,
    },
};

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

const DEFAULT_SESSION_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_SESSIONS) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Process-local session histories. Nothing survives a restart.
///
/// At most `max_sessions` histories are kept; the least recently used session
/// is evicted when a new one would exceed that.
#[derive(Debug, Clone)]
pub struct InMemoryJournalRepository {
    sessions: Arc<RwLock<LruCache<String, JournalHistory>>>,
    max_entries_per_session: usize,
}

impl Default for InMemoryJournalRepository {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_MAX_ENTRIES)
    }
}

impl InMemoryJournalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, max_entries_per_session: usize) -> Self {
        let capacity = NonZeroUsize::new(max_sessions).unwrap_or(DEFAULT_SESSION_CAPACITY);

        Self {
            sessions: Arc::new(RwLock::new(LruCache::new(capacity))),
            max_entries_per_session,
        }
    }
}

impl JournalRepository for InMemoryJournalRepository {
    async fn prepend(&self, session_id: String, entry: JournalEntry) -> Result<(), CoreError> {
        let max_entries = self.max_entries_per_session;
        let mut sessions = self.sessions.write().await;
        sessions
            .get_or_insert_mut(session_id, || JournalHistory::with_capacity(max_entries))
            .add_entry(entry);
        Ok(())
    }

    async fn list(&self, session_id: String) -> Result<Vec<JournalEntry>, CoreError> {
        // LruCache::get updates recency, so it needs the write lock
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .get(&session_id)
            .map(|history| history.entries().cloned().collect())
            .unwrap_or_default())
    }

    async fn clear(&self, session_id: String) -> Result<usize, CoreError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .pop(&session_id)
            .map(|mut history| history.clear())
            .unwrap_or(0))
    }
}
