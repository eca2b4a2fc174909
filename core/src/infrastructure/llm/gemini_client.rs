use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use crate::domain::{
    advisory::{
        ports::LLMClient,
        value_objects::{GenerationRequest, ModelReply, ToolCall, ToolDeclaration, Turn},
    },
    common::{LLMConfig, entities::app_errors::CoreError},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    FunctionCall {
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
    },
    FunctionResponse {
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct FunctionCall {
    name: String,
    #[serde(default)]
    args: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct FunctionResponse {
    name: String,
    response: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct GeminiTool {
    function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Debug, Serialize)]
struct FunctionDeclaration {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Maps a conversation onto Gemini contents. With tools offered, JSON mode
    /// is not available, so the response schema travels in the instruction.
    fn build_request(request: &GenerationRequest) -> GeminiRequest {
        let mut contents: Vec<Content> = request
            .conversation
            .iter()
            .map(|turn| match turn {
                Turn::User(text) => Content {
                    role: Some("user".to_string()),
                    parts: vec![Part::Text { text: text.clone() }],
                },
                Turn::ToolCalls(calls) => Content {
                    role: Some("model".to_string()),
                    parts: calls
                        .iter()
                        .map(|call| Part::FunctionCall {
                            function_call: FunctionCall {
                                name: call.name.clone(),
                                args: call.args.clone(),
                            },
                        })
                        .collect(),
                },
                Turn::ToolResults(results) => Content {
                    role: Some("user".to_string()),
                    parts: results
                        .iter()
                        .map(|result| Part::FunctionResponse {
                            function_response: FunctionResponse {
                                name: result.name.clone(),
                                response: json!({ "result": result.output }),
                            },
                        })
                        .collect(),
                },
            })
            .collect();

        if request.tools.is_empty() {
            return GeminiRequest {
                contents,
                tools: Vec::new(),
                generation_config: Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: request.response_schema.clone(),
                }),
            };
        }

        if let Some(first) = contents.first_mut() {
            first.parts.push(Part::Text {
                text: format!(
                    "Respond with a single JSON object, without Markdown, matching this JSON schema:\n{}",
                    request.response_schema
                ),
            });
        }

        GeminiRequest {
            contents,
            tools: vec![GeminiTool {
                function_declarations: request.tools.iter().map(FunctionDeclaration::from).collect(),
            }],
            generation_config: None,
        }
    }

    fn into_reply(response: GeminiResponse) -> Result<ModelReply, CoreError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        let mut calls = Vec::new();
        let mut text = String::new();
        for part in parts {
            match part {
                Part::Text { text: chunk } => text.push_str(&chunk),
                Part::FunctionCall { function_call } => calls.push(ToolCall {
                    name: function_call.name,
                    args: function_call.args,
                }),
                Part::FunctionResponse { .. } => {
                    return Err(CoreError::ExternalServiceError(
                        "Unexpected function response in model output".to_string(),
                    ));
                }
            }
        }

        if !calls.is_empty() {
            return Ok(ModelReply::ToolCalls(calls));
        }
        if text.trim().is_empty() {
            return Err(CoreError::ExternalServiceError(format!(
                "Empty response from LLM (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }
        Ok(ModelReply::Text(text))
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<GeminiResponse, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })
    }
}

impl From<&ToolDeclaration> for FunctionDeclaration {
    fn from(declaration: &ToolDeclaration) -> Self {
        Self {
            name: declaration.name.clone(),
            description: declaration.description.clone(),
            parameters: declaration.parameters.clone(),
        }
    }
}

impl LLMClient for GeminiLLMClient {
    #[instrument(skip_all, fields(model = %self.model_name, turns = request.conversation.len()))]
    async fn generate(&self, request: GenerationRequest) -> Result<ModelReply, CoreError> {
        let gemini_request = Self::build_request(&request);
        let response = self.call_gemini_api(gemini_request).await?;
        let reply = Self::into_reply(response)?;

        debug!(
            tool_calls = matches!(reply, ModelReply::ToolCalls(_)),
            "Gemini reply received"
        );
        Ok(reply)
    }
}
