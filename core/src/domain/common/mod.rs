use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutrimindConfig {
    pub llm: LLMConfig,
    pub journal: JournalConfig,
}

#[derive(Clone, Debug)]
pub struct JournalConfig {
    pub max_sessions: usize,
    pub max_entries_per_session: usize,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Unset means the HTTP client's default applies.
    pub request_timeout: Option<Duration>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
