use std::{
    collections::VecDeque,
    future::Future,
    sync::{Arc, Mutex},
};

use crate::domain::{
    advisory::{
        ports::LLMClient,
        value_objects::{GenerationRequest, ModelReply, ToolCall},
    },
    common::entities::app_errors::CoreError,
};

/// LLM double replaying queued replies and recording every request it saw.
#[derive(Clone, Default)]
pub struct ScriptedLLM {
    replies: Arc<Mutex<VecDeque<Result<ModelReply, CoreError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedLLM {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, body: &str) -> Self {
        self.push(Ok(ModelReply::Text(body.to_string())))
    }

    pub fn tool_call(self, name: &str, args: serde_json::Value) -> Self {
        self.push(Ok(ModelReply::ToolCalls(vec![ToolCall {
            name: name.to_string(),
            args,
        }])))
    }

    pub fn failure(self, error: CoreError) -> Self {
        self.push(Err(error))
    }

    fn push(self, reply: Result<ModelReply, CoreError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl LLMClient for ScriptedLLM {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<ModelReply, CoreError>> + Send {
        self.requests.lock().unwrap().push(request);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::ExternalServiceError("script exhausted".into())));
        async move { reply }
    }
}
