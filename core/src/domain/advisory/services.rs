use crate::domain::{
    advisory::{
        entities::{
            CalorieAdjustmentInput, CalorieAdjustmentOutput, MoodAnalysis, MoodFoodRecommendation,
        },
        ports::{AdvisoryService, LLMClient},
        value_objects::JournalEntryInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    journal::ports::JournalRepository,
};

impl<LLM, JR> AdvisoryService for Service<LLM, JR>
where
    LLM: LLMClient,
    JR: JournalRepository,
{
    async fn recommend_food_for_mood(
        &self,
        input: JournalEntryInput,
    ) -> Result<MoodFoodRecommendation, CoreError> {
        self.prompts.mood_food.run(&self.llm_client, &input).await
    }

    async fn adjust_calorie_goals(
        &self,
        input: CalorieAdjustmentInput,
    ) -> Result<CalorieAdjustmentOutput, CoreError> {
        self.prompts
            .calorie_adjustment
            .run(&self.llm_client, &input)
            .await
    }

    async fn analyze_mood(&self, input: JournalEntryInput) -> Result<MoodAnalysis, CoreError> {
        self.prompts.mood_analysis.run(&self.llm_client, &input).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        domain::advisory::{
            orchestrator::{AdvisoryOrchestrator, Envelope},
            test_support::ScriptedLLM,
            value_objects::Turn,
        },
        infrastructure::journal::InMemoryJournalRepository,
    };

    fn service(llm: ScriptedLLM) -> Service<ScriptedLLM, InMemoryJournalRepository> {
        Service::new(llm, InMemoryJournalRepository::new())
    }

    const HAPPY_REPLY: &str = r#"{
        "mood": "happy and accomplished",
        "foodRecommendations": [
            {"name": "Paneer Tikka", "nutritionalValues": "Protein 18g", "healthBenefits": "Calcium", "bestTimeToEat": "Lunch", "moodSupport": "Sustains energy"},
            {"name": "Thali", "nutritionalValues": "Balanced", "healthBenefits": "Fibre", "bestTimeToEat": "Dinner", "moodSupport": "Keeps you satisfied"},
            {"name": "Masala Chai", "nutritionalValues": "Low calorie", "healthBenefits": "Antioxidants", "bestTimeToEat": "Evening", "moodSupport": "A calm ritual"}
        ]
    }"#;

    #[tokio::test]
    async fn test_journal_to_recommendation_scenario() {
        let entry = "I finished my project today and feel happy";
        let llm = ScriptedLLM::new()
            .tool_call("analyzeMood", json!({ "text": entry }))
            .tool_call("foodRecommendation", json!({ "mood": "happy" }))
            .text(HAPPY_REPLY);
        let service = service(llm.clone());

        let envelope = service.get_mood_and_food(entry.to_string()).await;

        let Envelope::Data { data } = envelope else {
            panic!("expected data, got {envelope:?}");
        };
        assert!(data.mood.contains("happy"));
        let names: Vec<_> = data
            .food_recommendations
            .iter()
            .map(|food| food.name.as_str())
            .collect();
        assert_eq!(names, ["Paneer Tikka", "Thali", "Masala Chai"]);

        let requests = llm.requests();
        assert_eq!(requests.len(), 3);
        match &requests[0].conversation[0] {
            Turn::User(instruction) => assert!(instruction.contains(entry)),
            other => panic!("unexpected first turn {other:?}"),
        }
        assert_eq!(
            requests[2].conversation[4],
            Turn::ToolResults(vec![crate::domain::advisory::ToolResult {
                name: "foodRecommendation".into(),
                output: json!(["Paneer Tikka", "Thali", "Masala Chai"]),
            }])
        );
    }

    #[tokio::test]
    async fn test_calorie_adjustment_scenario() {
        let llm = ScriptedLLM::new().text(
            r#"{"adjustedCalories": 1850, "adjustedProtein": 140.5, "adjustedCarbs": 180,
                "adjustedFat": 62, "reasoning": "Lower intake for a sedentary, stressed day."}"#,
        );
        let service = service(llm.clone());

        let envelope = service
            .get_calorie_adjustment(CalorieAdjustmentInput {
                mood: "Stressed".to_string(),
                activity_level: "Sedentary".to_string(),
                current_calories: 2000.0,
                current_protein: 150.0,
                current_carbs: 200.0,
                current_fat: 60.0,
            })
            .await;

        assert_eq!(
            envelope,
            Envelope::Data {
                data: CalorieAdjustmentOutput {
                    adjusted_calories: 1850.0,
                    adjusted_protein: 140.5,
                    adjusted_carbs: 180.0,
                    adjusted_fat: 62.0,
                    reasoning: "Lower intake for a sedentary, stressed day.".to_string(),
                }
            }
        );
        assert!(llm.requests()[0].tools.is_empty());
    }

    #[tokio::test]
    async fn test_model_numbers_are_not_clamped() {
        let llm = ScriptedLLM::new().text(
            r#"{"adjustedCalories": -50, "adjustedProtein": 0, "adjustedCarbs": 1e6,
                "adjustedFat": 0, "reasoning": "odd"}"#,
        );
        let output = service(llm)
            .adjust_calorie_goals(CalorieAdjustmentInput {
                mood: "Happy".to_string(),
                activity_level: "Active".to_string(),
                current_calories: 0.0,
                current_protein: 0.0,
                current_carbs: 0.0,
                current_fat: 0.0,
            })
            .await
            .unwrap();
        assert_eq!(output.adjusted_calories, -50.0);
        assert_eq!(output.adjusted_carbs, 1e6);
    }

    #[tokio::test]
    async fn test_mood_analysis() {
        let llm = ScriptedLLM::new().text(r#"{"mood": "anxious", "sentimentScore": -0.4}"#);
        let analysis = service(llm)
            .analyze_mood(JournalEntryInput {
                journal_entry: "Deadlines everywhere".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(analysis.mood, "anxious");
        assert_eq!(analysis.sentiment_score, -0.4);
    }
}
