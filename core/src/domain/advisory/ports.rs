use std::future::Future;

use crate::domain::{
    advisory::{
        entities::{
            CalorieAdjustmentInput, CalorieAdjustmentOutput, MoodAnalysis, MoodFoodRecommendation,
        },
        value_objects::{GenerationRequest, JournalEntryInput, ModelReply},
    },
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling the generative model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Runs one generation turn. The model either answers with text or asks
    /// for tool calls; it never does both in one reply.
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<ModelReply, CoreError>> + Send;
}

/// Service trait for the advisories backed by the model
#[cfg_attr(test, mockall::automock)]
pub trait AdvisoryService: Send + Sync {
    fn recommend_food_for_mood(
        &self,
        input: JournalEntryInput,
    ) -> impl Future<Output = Result<MoodFoodRecommendation, CoreError>> + Send;

    fn adjust_calorie_goals(
        &self,
        input: CalorieAdjustmentInput,
    ) -> impl Future<Output = Result<CalorieAdjustmentOutput, CoreError>> + Send;

    fn analyze_mood(
        &self,
        input: JournalEntryInput,
    ) -> impl Future<Output = Result<MoodAnalysis, CoreError>> + Send;
}
