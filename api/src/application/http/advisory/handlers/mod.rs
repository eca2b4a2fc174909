pub mod get_calorie_adjustment;
pub mod get_mood_analysis;
pub mod get_mood_and_food;
pub mod get_nutrition_defaults;
