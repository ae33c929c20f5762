#![allow(dead_code)]

pub mod mocks;

use genai_relay::{
    config::{ImageGenerationConfig, TextGenerationConfig},
    handlers::{ImageHandler, TextHandler},
};
use mocks::{MockInferenceClient, MockObjectStore};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_BUCKET: &str = "test-bucket";

pub fn create_text_handler(client: Arc<MockInferenceClient>) -> TextHandler {
    TextHandler::new(client, TextGenerationConfig::default())
}

pub fn create_image_handler(
    client: Arc<MockInferenceClient>,
    store: Arc<MockObjectStore>,
) -> ImageHandler {
    ImageHandler::new(client, store, ImageGenerationConfig::default(), TEST_BUCKET)
}

pub fn prompt_body(prompt: &str) -> String {
    serde_json::json!({ "prompt": prompt }).to_string()
}

pub fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).expect("response body should be JSON")
}
