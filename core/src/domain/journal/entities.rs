use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    advisory::entities::{FoodDetail, MoodCategory, MoodFoodRecommendation},
    common::generate_timestamp,
};

/// A journal entry together with the advisory it produced. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub entry: String,
    pub mood: String,
    pub mood_category: MoodCategory,
    pub food_recommendations: Vec<FoodDetail>,
}

impl JournalEntry {
    pub fn new(entry: String, recommendation: MoodFoodRecommendation) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            timestamp: now,
            entry,
            mood_category: MoodCategory::from_mood(&recommendation.mood),
            mood: recommendation.mood,
            food_recommendations: recommendation.food_recommendations,
        }
    }
}
