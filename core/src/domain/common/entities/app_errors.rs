use thiserror::Error;

use crate::domain::{advisory::tools::ToolError, schema::ValidationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("schema validation failed: {0}")]
    Schema(#[from] ValidationError),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("prompt template error: {0}")]
    Template(String),

    #[error("model kept requesting tools after {0} rounds")]
    ToolLoopExceeded(usize),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
