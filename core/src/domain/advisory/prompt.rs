use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::domain::{
    advisory::{
        ports::LLMClient,
        tools::ToolRegistry,
        value_objects::{GenerationRequest, ModelReply, ToolResult, Turn},
    },
    common::entities::app_errors::CoreError,
    schema::Shape,
};

/// Upper bound on tool-call rounds within a single advisory.
pub const MAX_TOOL_ROUNDS: usize = 5;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}\}").expect("placeholder pattern")
});

/// Instruction template bound to its input and output shapes and the tools
/// the model may call while answering it.
#[derive(Debug, Clone)]
pub struct TypedPrompt {
    name: &'static str,
    template: &'static str,
    input_shape: Shape,
    output_shape: Shape,
    tools: ToolRegistry,
}

impl TypedPrompt {
    pub fn new(
        name: &'static str,
        template: &'static str,
        input_shape: Shape,
        output_shape: Shape,
    ) -> Self {
        Self {
            name,
            template,
            input_shape,
            output_shape,
            tools: ToolRegistry::new(),
        }
    }

    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Interpolates `{{{field}}}` placeholders from `input`. Strings are
    /// inserted verbatim, other values as JSON.
    pub fn render(&self, input: &Value) -> Result<String, CoreError> {
        self.input_shape.validate(input)?;

        let mut rendered = String::with_capacity(self.template.len());
        let mut last = 0;
        for captures in PLACEHOLDER.captures_iter(self.template) {
            let (Some(whole), Some(key)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let value = input.get(key.as_str()).ok_or_else(|| {
                CoreError::Template(format!(
                    "no value for `{}` in prompt `{}`",
                    key.as_str(),
                    self.name
                ))
            })?;

            rendered.push_str(&self.template[last..whole.start()]);
            match value {
                Value::String(text) => rendered.push_str(text),
                other => rendered.push_str(&other.to_string()),
            }
            last = whole.end();
        }
        rendered.push_str(&self.template[last..]);

        Ok(rendered)
    }

    /// Renders the instruction, lets the model call tools, then validates and
    /// decodes its final reply. The generation is attempted once.
    #[instrument(skip_all, fields(prompt = self.name))]
    pub async fn run<LLM, I, O>(&self, llm: &LLM, input: &I) -> Result<O, CoreError>
    where
        LLM: LLMClient,
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let input =
            serde_json::to_value(input).map_err(|e| CoreError::InvalidInput(e.to_string()))?;
        let instruction = self.render(&input)?;

        let response_schema = self.output_shape.to_json_schema();
        let tools = self.tools.declarations();
        let mut conversation = vec![Turn::User(instruction)];

        for round in 0..=MAX_TOOL_ROUNDS {
            let reply = llm
                .generate(GenerationRequest {
                    conversation: conversation.clone(),
                    response_schema: response_schema.clone(),
                    tools: tools.clone(),
                })
                .await?;

            let calls = match reply {
                ModelReply::Text(text) => return self.decode(&text),
                ModelReply::ToolCalls(_) if round == MAX_TOOL_ROUNDS => break,
                ModelReply::ToolCalls(calls) => calls,
            };

            debug!(round, count = calls.len(), "model requested tool calls");
            let results = calls
                .iter()
                .map(|call| {
                    self.tools
                        .invoke(&call.name, &call.args)
                        .map(|output| ToolResult {
                            name: call.name.clone(),
                            output,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            conversation.push(Turn::ToolCalls(calls));
            conversation.push(Turn::ToolResults(results));
        }

        error!("model did not produce an answer within {MAX_TOOL_ROUNDS} tool rounds");
        Err(CoreError::ToolLoopExceeded(MAX_TOOL_ROUNDS))
    }

    fn decode<O: DeserializeOwned>(&self, text: &str) -> Result<O, CoreError> {
        let parsed: Value = serde_json::from_str(strip_code_fence(text)).map_err(|e| {
            error!("Failed to parse LLM response: {}", e);
            CoreError::MalformedResponse(format!("Failed to parse LLM response: {}", e))
        })?;

        let parsed = self.output_shape.conform(parsed).map_err(|e| {
            error!("LLM response does not match the output schema: {}", e);
            CoreError::Schema(e)
        })?;

        serde_json::from_value(parsed).map_err(|e| {
            error!("Invalid {} output: {}", self.name, e);
            CoreError::MalformedResponse(format!("Invalid {} output: {}", self.name, e))
        })
    }
}

/// Models sometimes wrap JSON in a Markdown fence despite being asked not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
