use super::{
    RequestHandler,
    types::{ErrorResponse, ImageGenerationResponse, RequestEnvelope, ResponseEnvelope},
};
use crate::{
    Error, Result,
    config::ImageGenerationConfig,
    inference::{InferenceClient, TextToImageRequest, TextToImageResponse},
    storage::{IMAGE_CONTENT_TYPE, ObjectStore, generate_object_name, s3_url},
};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::sync::Arc;
use tracing::{debug, error, info};

pub const EMPTY_PROMPT_MESSAGE: &str = "Prompt is required and cannot be empty";

/// Relays a prompt to a text-to-image model and stores the resulting PNG.
pub struct ImageHandler {
    client: Arc<dyn InferenceClient>,
    store: Arc<dyn ObjectStore>,
    config: ImageGenerationConfig,
    bucket: String,
}

impl ImageHandler {
    pub fn new(
        client: Arc<dyn InferenceClient>,
        store: Arc<dyn ObjectStore>,
        config: ImageGenerationConfig,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            client,
            store,
            config,
            bucket: bucket.into(),
        }
    }

    pub fn build_request(&self, prompt: &str) -> TextToImageRequest {
        TextToImageRequest::new(&self.config, prompt)
    }

    async fn generate(&self, request: &RequestEnvelope) -> Result<ImageGenerationResponse> {
        let prompt = request.prompt()?.unwrap_or_default();
        if prompt.trim().is_empty() {
            return Err(Error::validation(EMPTY_PROMPT_MESSAGE));
        }

        info!("Received image generation request ({} chars)", prompt.len());

        let b64_image = self.invoke(&prompt).await?;
        let image_bytes = decode_image(&b64_image)?;

        let file_name = generate_object_name();
        self.store
            .put_object(&self.bucket, &file_name, image_bytes, IMAGE_CONTENT_TYPE)
            .await?;

        info!("Stored generated image as {}", file_name);

        Ok(ImageGenerationResponse {
            prompt,
            s3_url: s3_url(&self.bucket, &file_name),
            file_name,
            b64_image,
        })
    }

    /// Returns the first base64-encoded image produced for `prompt`.
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let request = serde_json::to_value(self.build_request(prompt))?;
        let response = self
            .client
            .invoke_model(&self.config.model_id, &request)
            .await?;

        let response: TextToImageResponse = serde_json::from_value(response)?;
        if let Some(message) = response.error {
            return Err(Error::inference(message));
        }

        debug!("Model returned {} image(s)", response.images.len());

        response
            .images
            .into_iter()
            .next()
            .ok_or_else(|| Error::inference("model response contained no images"))
    }
}

/// Decodes a base64 image, ignoring ASCII whitespace such as MIME line breaks.
fn decode_image(b64_image: &str) -> Result<Vec<u8>> {
    let compact: String = b64_image
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

#[async_trait]
impl RequestHandler for ImageHandler {
    async fn handle(&self, request: &RequestEnvelope) -> ResponseEnvelope {
        match self.generate(request).await {
            Ok(response) => ResponseEnvelope::json(200, &response),
            Err(e) => {
                match &e {
                    Error::Validation(_) => info!("Rejecting image request: {}", e),
                    _ => error!("Image generation failed: {}", e),
                }
                ResponseEnvelope::json(
                    e.status_code(),
                    &ErrorResponse {
                        error: e.to_string(),
                    },
                )
            }
        }
    }
}
