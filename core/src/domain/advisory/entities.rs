use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One food suggestion, elaborated by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetail {
    pub name: String,
    pub nutritional_values: String,
    pub health_benefits: String,
    pub best_time_to_eat: String,
    pub mood_support: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodFoodRecommendation {
    pub mood: String,
    pub food_recommendations: Vec<FoodDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub mood: String,
    /// Requested in [-1, 1]; not enforced.
    pub sentiment_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalorieAdjustmentInput {
    pub mood: String,
    pub activity_level: String,
    pub current_calories: f64,
    pub current_protein: f64,
    pub current_carbs: f64,
    pub current_fat: f64,
}

/// Adjusted goals exactly as returned by the model. Values are not
/// bounds-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalorieAdjustmentOutput {
    pub adjusted_calories: f64,
    pub adjusted_protein: f64,
    pub adjusted_carbs: f64,
    pub adjusted_fat: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Positive,
    Negative,
    Neutral,
}

impl MoodCategory {
    /// Buckets a free-form mood label returned by the model.
    pub fn from_mood(mood: &str) -> Self {
        let mood = mood.to_lowercase();
        if ["happy", "joy", "positive"].iter().any(|k| mood.contains(k)) {
            MoodCategory::Positive
        } else if ["sad", "negative", "depressed"].iter().any(|k| mood.contains(k)) {
            MoodCategory::Negative
        } else {
            MoodCategory::Neutral
        }
    }
}

pub const MOOD_OPTIONS: [&str; 5] = ["Happy", "Sad", "Angry", "Neutral", "Stressed"];
pub const ACTIVITY_LEVELS: [&str; 4] = ["Sedentary", "Light", "Moderate", "Active"];

/// Selectable values and starting goals for the nutrition planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionDefaults {
    pub moods: Vec<String>,
    pub activity_levels: Vec<String>,
    pub goals: CalorieAdjustmentInput,
}

impl Default for NutritionDefaults {
    fn default() -> Self {
        Self {
            moods: MOOD_OPTIONS.iter().map(|m| m.to_string()).collect(),
            activity_levels: ACTIVITY_LEVELS.iter().map(|a| a.to_string()).collect(),
            goals: CalorieAdjustmentInput {
                mood: "Neutral".to_string(),
                activity_level: "Sedentary".to_string(),
                current_calories: 2000.0,
                current_protein: 150.0,
                current_carbs: 200.0,
                current_fat: 60.0,
            },
        }
    }
}
