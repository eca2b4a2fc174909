use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{
    advisory::{
        entities::{
            CalorieAdjustmentInput, CalorieAdjustmentOutput, MoodAnalysis, MoodFoodRecommendation,
        },
        ports::AdvisoryService,
        value_objects::JournalEntryInput,
    },
    common::entities::app_errors::CoreError,
};

pub const EMPTY_JOURNAL_ENTRY: &str = "Journal entry cannot be empty.";
pub const MOOD_FOOD_FAILURE: &str = "Failed to analyze mood and recommend food.";
pub const CALORIE_ADJUSTMENT_FAILURE: &str = "Failed to adjust calorie goals.";
pub const MOOD_ANALYSIS_FAILURE: &str = "Failed to analyze mood.";

/// Why an envelope carries an error. Not part of the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureKind {
    /// The caller's input was rejected before the model was contacted.
    Rejected,
    #[default]
    Failed,
}

/// Uniform result of an orchestrator entry point: `{"data": ..}` or `{"error": ".."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Envelope<T> {
    Data {
        data: T,
    },
    Error {
        error: String,
        #[serde(skip)]
        kind: FailureKind,
    },
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Envelope::Data { data }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Envelope::Error {
            error: message.into(),
            kind: FailureKind::Rejected,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Envelope::Error {
            error: message.into(),
            kind: FailureKind::Failed,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Envelope::Data { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Envelope::Data { .. } => None,
            Envelope::Error { kind, .. } => Some(*kind),
        }
    }
}

/// Server-side entry points. Input is checked before the model is called, and
/// every failure collapses into a short message.
pub trait AdvisoryOrchestrator: Send + Sync {
    fn get_mood_and_food(
        &self,
        journal_entry: String,
    ) -> impl Future<Output = Envelope<MoodFoodRecommendation>> + Send;

    fn get_calorie_adjustment(
        &self,
        input: CalorieAdjustmentInput,
    ) -> impl Future<Output = Envelope<CalorieAdjustmentOutput>> + Send;

    fn get_mood_analysis(
        &self,
        journal_entry: String,
    ) -> impl Future<Output = Envelope<MoodAnalysis>> + Send;
}

impl<S> AdvisoryOrchestrator for S
where
    S: AdvisoryService,
{
    async fn get_mood_and_food(&self, journal_entry: String) -> Envelope<MoodFoodRecommendation> {
        if let Err(e) = ensure_journal_entry(&journal_entry) {
            return reject(e);
        }

        match self
            .recommend_food_for_mood(JournalEntryInput { journal_entry })
            .await
        {
            Ok(result) => Envelope::data(result),
            Err(e) => {
                error!("mood and food advisory failed: {}", e);
                Envelope::failed(MOOD_FOOD_FAILURE)
            }
        }
    }

    async fn get_calorie_adjustment(
        &self,
        input: CalorieAdjustmentInput,
    ) -> Envelope<CalorieAdjustmentOutput> {
        if let Err(e) = ensure_calorie_input(&input) {
            return reject(e);
        }

        match self.adjust_calorie_goals(input).await {
            Ok(result) => Envelope::data(result),
            Err(e) => {
                error!("calorie adjustment advisory failed: {}", e);
                Envelope::failed(CALORIE_ADJUSTMENT_FAILURE)
            }
        }
    }

    async fn get_mood_analysis(&self, journal_entry: String) -> Envelope<MoodAnalysis> {
        if let Err(e) = ensure_journal_entry(&journal_entry) {
            return reject(e);
        }

        match self.analyze_mood(JournalEntryInput { journal_entry }).await {
            Ok(result) => Envelope::data(result),
            Err(e) => {
                error!("mood analysis advisory failed: {}", e);
                Envelope::failed(MOOD_ANALYSIS_FAILURE)
            }
        }
    }
}

fn reject<T>(error: CoreError) -> Envelope<T> {
    warn!("advisory input rejected: {}", error);
    Envelope::rejected(error.to_string())
}

pub fn ensure_journal_entry(journal_entry: &str) -> Result<(), CoreError> {
    if journal_entry.trim().is_empty() {
        return Err(CoreError::InvalidInput(EMPTY_JOURNAL_ENTRY.to_string()));
    }
    Ok(())
}

pub fn ensure_calorie_input(input: &CalorieAdjustmentInput) -> Result<(), CoreError> {
    if input.mood.trim().is_empty() {
        return Err(CoreError::InvalidInput("Please select a mood.".to_string()));
    }
    if input.activity_level.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "Please select an activity level.".to_string(),
        ));
    }

    let goals = [
        ("Calories", input.current_calories),
        ("Protein", input.current_protein),
        ("Carbs", input.current_carbs),
        ("Fat", input.current_fat),
    ];
    for (label, value) in goals {
        // NaN fails this comparison too.
        if !(value.is_finite() && value >= 0.0) {
            return Err(CoreError::InvalidInput(format!(
                "{label} must be zero or greater."
            )));
        }
    }
    Ok(())
}
