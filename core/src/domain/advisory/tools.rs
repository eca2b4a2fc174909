use std::{fmt, sync::Arc};

use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::{
    advisory::value_objects::ToolDeclaration,
    schema::{FieldKind, Shape, ValidationError},
};

pub const HAPPY_FOODS: [&str; 3] = ["Paneer Tikka", "Thali", "Masala Chai"];
pub const SAD_FOODS: [&str; 3] = ["Idli Sambar", "Poha", "Seasonal Fruits"];
pub const ANGRY_FOODS: [&str; 3] = ["Masala Chai", "Mixed Veg Curry", "Seasonal Fruits"];
pub const DEFAULT_FOODS: [&str; 3] = ["Thali", "Seasonal Fruits", "Mixed Veg Curry"];

/// Crude keyword classifier. Case-sensitive, `happy` wins over `sad`.
pub fn classify_mood_by_keyword(text: &str) -> &'static str {
    if text.contains("happy") {
        "happy"
    } else if text.contains("sad") {
        "sad"
    } else {
        "neutral"
    }
}

pub fn recommend_foods_by_mood(mood: &str) -> [&'static str; 3] {
    match mood.to_lowercase().as_str() {
        "happy" => HAPPY_FOODS,
        "sad" => SAD_FOODS,
        "angry" => ANGRY_FOODS,
        _ => DEFAULT_FOODS,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("unknown tool `{0}`")]
    UnknownTool(String),

    #[error("invalid arguments for `{tool}`: {source}")]
    InvalidArguments {
        tool: String,
        source: ValidationError,
    },

    #[error("`{tool}` produced an invalid result: {source}")]
    InvalidOutput {
        tool: String,
        source: ValidationError,
    },
}

/// Deterministic capability the model may invoke while generating.
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn input_shape(&self) -> Shape;

    fn output_kind(&self) -> FieldKind;

    /// Called with arguments already validated against [`Tool::input_shape`].
    fn call(&self, args: &Value) -> Value;
}

pub struct AnalyzeMoodTool;

impl Tool for AnalyzeMoodTool {
    fn name(&self) -> &'static str {
        "analyzeMood"
    }

    fn description(&self) -> &'static str {
        "Analyzes the sentiment of a text and returns the mood."
    }

    fn input_shape(&self) -> Shape {
        Shape::new().field("text", FieldKind::String, "The text to analyze.")
    }

    fn output_kind(&self) -> FieldKind {
        FieldKind::String
    }

    fn call(&self, args: &Value) -> Value {
        let text = args.get("text").and_then(Value::as_str).unwrap_or_default();
        json!(classify_mood_by_keyword(text))
    }
}

pub struct FoodRecommendationTool;

impl Tool for FoodRecommendationTool {
    fn name(&self) -> &'static str {
        "foodRecommendation"
    }

    fn description(&self) -> &'static str {
        "Recommends foods based on a given mood."
    }

    fn input_shape(&self) -> Shape {
        Shape::new().field(
            "mood",
            FieldKind::String,
            "The mood for which to recommend foods.",
        )
    }

    fn output_kind(&self) -> FieldKind {
        FieldKind::array_of(FieldKind::String)
    }

    fn call(&self, args: &Value) -> Value {
        let mood = args.get("mood").and_then(Value::as_str).unwrap_or_default();
        json!(recommend_foods_by_mood(mood))
    }
}

/// Tagged list of tools offered to a prompt, looked up by name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: impl Tool + 'static) -> Self {
        self.tools.push(Arc::new(tool));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.tools
            .iter()
            .map(|tool| ToolDeclaration {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.input_shape().to_json_schema(),
            })
            .collect()
    }

    pub fn invoke(&self, name: &str, args: &Value) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        tool.input_shape()
            .validate(args)
            .map_err(|source| ToolError::InvalidArguments {
                tool: name.to_string(),
                source,
            })?;

        let output = tool.call(args);
        tool.output_kind()
            .validate(&output, "$")
            .map_err(|source| ToolError::InvalidOutput {
                tool: name.to_string(),
                source,
            })?;

        tracing::debug!(tool = name, %args, %output, "tool invoked");
        Ok(output)
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
