use super::{
    RequestHandler,
    types::{RequestEnvelope, ResponseEnvelope, TextErrorResponse, TextGenerationResponse},
};
use crate::{
    Error, Result,
    config::TextGenerationConfig,
    inference::{InferenceClient, MessagesRequest, MessagesResponse},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

pub const MISSING_PROMPT_MESSAGE: &str = "Prompt is required";

/// Relays a prompt to a conversational text model.
pub struct TextHandler {
    client: Arc<dyn InferenceClient>,
    config: TextGenerationConfig,
}

impl TextHandler {
    pub fn new(client: Arc<dyn InferenceClient>, config: TextGenerationConfig) -> Self {
        Self { client, config }
    }

    pub fn build_request(&self, prompt: &str) -> MessagesRequest {
        MessagesRequest::single_turn(&self.config, prompt)
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = serde_json::to_value(self.build_request(prompt))?;
        let response = self
            .client
            .invoke_model(&self.config.model_id, &request)
            .await?;

        let response: MessagesResponse = serde_json::from_value(response)?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| Error::inference("model response contained no text content"))
    }

    fn failure(error: &Error, input: Option<String>) -> ResponseEnvelope {
        ResponseEnvelope::json(
            error.status_code(),
            &TextErrorResponse {
                error: error.to_string(),
                input,
            },
        )
    }
}

#[async_trait]
impl RequestHandler for TextHandler {
    async fn handle(&self, request: &RequestEnvelope) -> ResponseEnvelope {
        let prompt = match request.prompt() {
            Ok(Some(prompt)) => prompt,
            Ok(None) => {
                info!("Rejecting text request without a prompt");
                return Self::failure(&Error::validation(MISSING_PROMPT_MESSAGE), None);
            }
            Err(e) => {
                error!("Failed to parse text request body: {}", e);
                return Self::failure(&e, None);
            }
        };

        info!("Received text generation request ({} chars)", prompt.len());

        match self.generate(&prompt).await {
            Ok(generated_text) => {
                info!("Generated {} chars of text", generated_text.len());
                ResponseEnvelope::json(200, &TextGenerationResponse { generated_text })
            }
            Err(e) => {
                error!("Text generation failed: {}", e);
                Self::failure(&e, Some(prompt))
            }
        }
    }
}
