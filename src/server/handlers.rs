use crate::handlers::{ImageHandler, RequestEnvelope, RequestHandler, ResponseEnvelope, TextHandler};
use axum::{
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub text: Arc<TextHandler>,
    pub image: Arc<ImageHandler>,
}

pub async fn generate_text(State(state): State<AppState>, body: String) -> Response {
    info!("POST /text ({} byte body)", body.len());
    relay(state.text.as_ref(), body).await
}

pub async fn generate_image(State(state): State<AppState>, body: String) -> Response {
    info!("POST /image ({} byte body)", body.len());
    relay(state.image.as_ref(), body).await
}

async fn relay<H: RequestHandler + ?Sized>(handler: &H, body: String) -> Response {
    let envelope = if body.is_empty() {
        RequestEnvelope::empty()
    } else {
        RequestEnvelope::new(body)
    };

    handler.handle(&envelope).await.into_response()
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}
