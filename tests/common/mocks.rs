use async_trait::async_trait;
use genai_relay::{Error, Result, inference::InferenceClient, storage::ObjectStore};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Mock inference client for testing
#[derive(Debug)]
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<(String, Value)>>>,
    pub error: Option<String>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, response: Value) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push((model_id.to_string(), body.clone()));

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Mock object store for testing
#[derive(Debug)]
pub struct MockObjectStore {
    pub objects: Arc<Mutex<Vec<StoredObject>>>,
    pub error: Option<String>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        if let Some(ref error) = self.error {
            return Err(Error::storage(error.clone()));
        }

        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            data,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_mock_text_response(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
}

pub fn create_mock_image_response(b64_image: &str) -> Value {
    json!({ "images": [b64_image] })
}
