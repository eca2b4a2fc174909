use crate::domain::{
    advisory::{
        prompt::TypedPrompt,
        tools::{AnalyzeMoodTool, FoodRecommendationTool, ToolRegistry},
    },
    schema::{FieldKind, Shape},
};

const MOOD_FOOD_TEMPLATE: &str = "Analyze the journal entry below to determine the user's mood.
Then, for each recommended food, provide a detailed dashboard of information including nutritional values, health benefits, best time to eat, and how it supports the mood.

Journal Entry: {{{journalEntry}}}

1.  First, use the analyzeMood tool as a hint, then decide the mood from the whole entry.
2.  Then, use the foodRecommendation tool to get a list of food names for that mood.
3.  For each food name, generate the detailed information required by the output schema (nutritionalValues, healthBenefits, bestTimeToEat, moodSupport).
4.  Return the mood and the detailed food recommendations in the output.
";

const CALORIE_ADJUSTMENT_TEMPLATE: &str = "You are an expert nutritionist who adjusts daily calorie and macronutrient goals based on a user's mood and activity level.

Based on the user's mood ({{{mood}}}) and activity level ({{{activityLevel}}}), adjust their calorie and macronutrient goals.

Here are the user's current goals:
- Calories: {{{currentCalories}}}
- Protein: {{{currentProtein}}}g
- Carbs: {{{currentCarbs}}}g
- Fat: {{{currentFat}}}g

Provide the adjusted calorie and macronutrient goals, along with a clear explanation of why you made these adjustments. Ensure that the adjusted values are numbers, do not add units such as 'g' or 'calories'.

Adhere to the output schema strictly.
";

const MOOD_ANALYSIS_TEMPLATE: &str = "You are a sentiment analysis expert. Analyze the following journal entry and determine the user's mood. Also, provide a sentiment score between -1 (negative) and 1 (positive).

Journal Entry: {{{journalEntry}}}";

pub fn journal_entry_input_shape() -> Shape {
    Shape::new().field(
        "journalEntry",
        FieldKind::String,
        "The user's journal entry for mood analysis.",
    )
}

pub fn food_detail_shape() -> Shape {
    Shape::new()
        .field("name", FieldKind::String, "The name of the food item.")
        .field(
            "nutritionalValues",
            FieldKind::String,
            "Key nutritional values (e.g., Calories, Protein, Carbs, Fat).",
        )
        .field(
            "healthBenefits",
            FieldKind::String,
            "The primary health benefits of consuming this food.",
        )
        .field(
            "bestTimeToEat",
            FieldKind::String,
            "The recommended time of day to eat this food.",
        )
        .field(
            "moodSupport",
            FieldKind::String,
            "How this food helps support the user's mood or energy levels.",
        )
}

pub fn mood_food_output_shape() -> Shape {
    Shape::new()
        .field("mood", FieldKind::String, "The detected mood from the journal entry.")
        .field(
            "foodRecommendations",
            FieldKind::array_of(FieldKind::Object(food_detail_shape())),
            "A list of detailed food recommendations to improve the user's mood.",
        )
}

pub fn calorie_adjustment_input_shape() -> Shape {
    Shape::new()
        .field("mood", FieldKind::String, "The current mood of the user.")
        .field(
            "activityLevel",
            FieldKind::String,
            "The activity level of the user (e.g., sedentary, light, moderate, active).",
        )
        .field("currentCalories", FieldKind::Number, "The current daily calorie goal.")
        .field("currentProtein", FieldKind::Number, "The current daily protein goal, in grams.")
        .field("currentCarbs", FieldKind::Number, "The current daily carbohydrate goal, in grams.")
        .field("currentFat", FieldKind::Number, "The current daily fat goal, in grams.")
}

pub fn calorie_adjustment_output_shape() -> Shape {
    Shape::new()
        .field("adjustedCalories", FieldKind::Number, "The adjusted daily calorie goal.")
        .field("adjustedProtein", FieldKind::Number, "The adjusted daily protein goal, in grams.")
        .field("adjustedCarbs", FieldKind::Number, "The adjusted daily carbohydrate goal, in grams.")
        .field("adjustedFat", FieldKind::Number, "The adjusted daily fat goal, in grams.")
        .field(
            "reasoning",
            FieldKind::String,
            "The reasoning behind the calorie and macronutrient adjustments.",
        )
}

pub fn mood_analysis_output_shape() -> Shape {
    Shape::new()
        .field("mood", FieldKind::String, "The detected mood from the journal entry.")
        .field(
            "sentimentScore",
            FieldKind::Number,
            "A numerical score indicating the sentiment of the journal entry.",
        )
}

/// The advisories this service runs, built once per service.
#[derive(Debug, Clone)]
pub struct AdvisoryPrompts {
    pub mood_food: TypedPrompt,
    pub calorie_adjustment: TypedPrompt,
    pub mood_analysis: TypedPrompt,
}

impl AdvisoryPrompts {
    pub fn new() -> Self {
        Self {
            mood_food: TypedPrompt::new(
                "moodBasedFoodRecommendation",
                MOOD_FOOD_TEMPLATE,
                journal_entry_input_shape(),
                mood_food_output_shape(),
            )
            .with_tools(
                ToolRegistry::new()
                    .register(AnalyzeMoodTool)
                    .register(FoodRecommendationTool),
            ),
            calorie_adjustment: TypedPrompt::new(
                "adjustCalorieGoals",
                CALORIE_ADJUSTMENT_TEMPLATE,
                calorie_adjustment_input_shape(),
                calorie_adjustment_output_shape(),
            ),
            mood_analysis: TypedPrompt::new(
                "moodAnalysis",
                MOOD_ANALYSIS_TEMPLATE,
                journal_entry_input_shape(),
                mood_analysis_output_shape(),
            ),
        }
    }
}

impl Default for AdvisoryPrompts {
    fn default() -> Self {
        Self::new()
    }
}
