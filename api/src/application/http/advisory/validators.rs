use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// Emptiness is checked downstream so the caller gets the advisory envelope.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryRequest {
    #[serde(default)]
    #[validate(length(max = 5000, message = "journalEntry must be at most 5000 characters"))]
    pub journal_entry: String,
}

/// Goals accept numbers or numeric strings. Anything else, or a missing goal,
/// becomes NaN and is rejected with the advisory envelope.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalorieAdjustmentRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "mood must be at most 64 characters"))]
    pub mood: String,

    #[serde(default)]
    #[validate(length(max = 64, message = "activityLevel must be at most 64 characters"))]
    pub activity_level: String,

    #[serde(default = "missing_number", deserialize_with = "coerce_number")]
    pub current_calories: f64,
    #[serde(default = "missing_number", deserialize_with = "coerce_number")]
    pub current_protein: f64,
    #[serde(default = "missing_number", deserialize_with = "coerce_number")]
    pub current_carbs: f64,
    #[serde(default = "missing_number", deserialize_with = "coerce_number")]
    pub current_fat: f64,
}

fn missing_number() -> f64 {
    f64::NAN
}

fn coerce_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}
