use crate::domain::advisory::entities::MoodFoodRecommendation;

#[derive(Debug, Clone)]
pub struct RecordJournalEntryInput {
    pub session_id: String,
    pub entry: String,
    pub recommendation: MoodFoodRecommendation,
}
