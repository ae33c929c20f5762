use crate::{Error, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{Client, error::DisplayErrorContext, primitives::Blob};
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Invokes `model_id` synchronously with a JSON body and returns the JSON
    /// body the model produced.
    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value>;
}

pub struct BedrockInferenceClient {
    client: Client,
}

impl BedrockInferenceClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_bedrockruntime::config::Builder::from(sdk_config);

        if let Some(endpoint_url) = endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl InferenceClient for BedrockInferenceClient {
    async fn invoke_model(&self, model_id: &str, body: &Value) -> Result<Value> {
        let payload = serde_json::to_vec(body)?;

        debug!("Invoking model {} with {} byte payload", model_id, payload.len());

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| Error::inference(DisplayErrorContext(&e).to_string()))?;

        let bytes = output.body.into_inner();
        debug!("Model {} returned {} bytes", model_id, bytes.len());

        Ok(serde_json::from_slice(&bytes)?)
    }
}
