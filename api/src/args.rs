use std::time::Duration;

use clap::Parser;
use nutrimind_core::{
    domain::{
        common::{JournalConfig, LLMConfig, NutrimindConfig},
        journal::history::DEFAULT_MAX_ENTRIES,
    },
    infrastructure::{
        journal::repositories::in_memory_journal_repository::DEFAULT_MAX_SESSIONS,
        llm::gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrimind-api", version, about = "NutriMind mood and nutrition advisory API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub journal: JournalArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Per-request timeout for model calls. Unset keeps the HTTP client default.
    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS")]
    pub llm_timeout_secs: Option<u64>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct JournalArgs {
    /// Sessions kept in memory; the least recently used one is evicted past this.
    #[arg(long = "journal-max-sessions", env = "JOURNAL_MAX_SESSIONS", default_value_t = DEFAULT_MAX_SESSIONS)]
    pub max_sessions: usize,

    #[arg(long = "journal-max-entries", env = "JOURNAL_MAX_ENTRIES", default_value_t = DEFAULT_MAX_ENTRIES)]
    pub max_entries_per_session: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutrimindConfig {
    fn from(value: Args) -> Self {
        NutrimindConfig {
            llm: LLMConfig {
                gemini_api_key: value.llm.gemini_api_key,
                gemini_model: value.llm.gemini_model,
                gemini_base_url: value.llm.gemini_base_url,
                request_timeout: value.llm.llm_timeout_secs.map(Duration::from_secs),
            },
            journal: JournalConfig {
                max_sessions: value.journal.max_sessions,
                max_entries_per_session: value.journal.max_entries_per_session,
            },
        }
    }
}
