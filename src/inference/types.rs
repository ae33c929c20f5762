use crate::config::{ImageGenerationConfig, TextGenerationConfig};
use serde::{Deserialize, Serialize};

const TEXT_TO_IMAGE_TASK: &str = "TEXT_IMAGE";

/// Anthropic Messages API body as accepted by Bedrock `InvokeModel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

/// Nova Canvas text-to-image body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToImageRequest {
    pub task_type: String,
    pub text_to_image_params: TextToImageParams,
    pub image_generation_config: ImageGenerationParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToImageParams {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationParams {
    pub number_of_images: u32,
    pub quality: String,
    pub cfg_scale: f64,
    pub height: u32,
    pub width: u32,
    pub seed: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextToImageResponse {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl MessagesRequest {
    pub fn single_turn(config: &TextGenerationConfig, prompt: &str) -> Self {
        Self {
            anthropic_version: config.anthropic_version.clone(),
            max_tokens: config.max_tokens,
            messages: vec![ChatMessage::user(prompt)],
            temperature: config.temperature,
        }
    }
}

impl MessagesResponse {
    /// Text of the first content block, if the model produced one.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(|block| block.text.as_deref())
    }
}

impl TextToImageRequest {
    pub fn new(config: &ImageGenerationConfig, prompt: &str) -> Self {
        Self {
            task_type: TEXT_TO_IMAGE_TASK.to_string(),
            text_to_image_params: TextToImageParams {
                text: prompt.to_string(),
            },
            image_generation_config: ImageGenerationParams {
                number_of_images: config.number_of_images,
                quality: config.quality.clone(),
                cfg_scale: config.cfg_scale,
                height: config.height,
                width: config.width,
                seed: config.seed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_messages_request_wire_shape() {
        let request = MessagesRequest::single_turn(&TextGenerationConfig::default(), "a red fox");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": 1000,
                "messages": [{"role": "user", "content": "a red fox"}],
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_text_to_image_request_wire_shape() {
        let request = TextToImageRequest::new(&ImageGenerationConfig::default(), "sunset");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "taskType": "TEXT_IMAGE",
                "textToImageParams": {"text": "sunset"},
                "imageGenerationConfig": {
                    "numberOfImages": 1,
                    "quality": "standard",
                    "cfgScale": 8.0,
                    "height": 512,
                    "width": 512,
                    "seed": 42
                }
            })
        );
    }

    #[test]
    fn test_first_text() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "type": "message",
            "content": [
                {"type": "text", "text": "A fox is red."},
                {"type": "text", "text": "ignored"}
            ],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("A fox is red."));

        let empty: MessagesResponse = serde_json::from_value(json!({"content": []})).unwrap();
        assert_eq!(empty.first_text(), None);

        let no_text: MessagesResponse =
            serde_json::from_value(json!({"content": [{"type": "tool_use"}]})).unwrap();
        assert_eq!(no_text.first_text(), None);
    }

    #[test]
    fn test_text_to_image_response_with_error() {
        let response: TextToImageResponse = serde_json::from_value(json!({
            "images": [],
            "error": "The generated image has been blocked"
        }))
        .unwrap();

        assert!(response.images.is_empty());
        assert_eq!(
            response.error.as_deref(),
            Some("The generated image has been blocked")
        );
    }
}
