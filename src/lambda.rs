use crate::handlers::{RequestEnvelope, RequestHandler, ResponseEnvelope};
use lambda_http::{Body, Error, Request, Response, http::header::CONTENT_TYPE, service_fn};
use std::sync::Arc;

/// Serves `handler` on the Lambda runtime until the runtime shuts down.
pub async fn serve<H>(handler: H) -> Result<(), Error>
where
    H: RequestHandler + 'static,
{
    let handler = Arc::new(handler);

    lambda_http::run(service_fn(move |event: Request| {
        let handler = Arc::clone(&handler);
        async move { handle_event(handler.as_ref(), event).await }
    }))
    .await
}

pub async fn handle_event<H>(handler: &H, event: Request) -> Result<Response<Body>, Error>
where
    H: RequestHandler + ?Sized,
{
    let envelope = to_envelope(event.body());
    let response = handler.handle(&envelope).await;
    into_response(response)
}

pub fn to_envelope(body: &Body) -> RequestEnvelope {
    match body {
        Body::Empty => RequestEnvelope::empty(),
        Body::Text(text) => RequestEnvelope::new(text.clone()),
        Body::Binary(bytes) => RequestEnvelope::new(String::from_utf8_lossy(bytes).into_owned()),
    }
}

pub fn into_response(envelope: ResponseEnvelope) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(envelope.status_code)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(envelope.body))?;

    Ok(response)
}
