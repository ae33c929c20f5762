mod client;
mod types;

pub use client::{BedrockInferenceClient, InferenceClient};
pub use types::*;
