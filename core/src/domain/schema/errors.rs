use thiserror::Error;

/// First offending field found while checking a value against a [`Shape`](super::Shape).
///
/// `field` is the dotted path from the validated root, with array positions
/// in brackets (`foodRecommendations[1].name`). The root itself is `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` must be {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::WrongType { field, .. } => field,
        }
    }
}
