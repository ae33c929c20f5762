use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

/// The part of an incoming HTTP event the handlers care about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestEnvelope {
    pub body: Option<String>,
}

/// Status code plus a JSON-encoded body, shaped like a Lambda proxy response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextGenerationResponse {
    pub generated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TextErrorResponse {
    pub error: String,
    pub input: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    pub prompt: String,
    pub s3_url: String,
    pub file_name: String,
    pub b64_image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RequestEnvelope {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the body and returns its `prompt` field. An absent or empty body
    /// yields `None`; a body that is not a JSON object with a string `prompt`
    /// is an error.
    pub fn prompt(&self) -> Result<Option<String>> {
        match self.body.as_deref() {
            None | Some("") => Ok(None),
            Some(body) => {
                let mut fields: Map<String, Value> = serde_json::from_str(body)?;
                match fields.remove("prompt") {
                    None | Some(Value::Null) => Ok(None),
                    Some(prompt) => Ok(Some(serde_json::from_value(prompt)?)),
                }
            }
        }
    }
}

impl ResponseEnvelope {
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self { status_code, body },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                Self {
                    status_code: 500,
                    body: r#"{"error":"Failed to serialize response"}"#.to_string(),
                }
            }
        }
    }
}
