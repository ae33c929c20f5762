mod image;
mod text;
mod types;

pub use image::{EMPTY_PROMPT_MESSAGE, ImageHandler};
pub use text::{MISSING_PROMPT_MESSAGE, TextHandler};
pub use types::*;

use async_trait::async_trait;

/// A stateless request/response transform. Failures are reported through the
/// returned envelope, never to the caller.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: &RequestEnvelope) -> ResponseEnvelope;
}
