pub mod handlers;

use crate::{
    Result,
    aws::load_sdk_config,
    config::Config,
    handlers::{ImageHandler, TextHandler},
    inference::{BedrockInferenceClient, InferenceClient},
    storage::S3ObjectStore,
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/text", post(handlers::generate_text))
        .route("/image", post(handlers::generate_image))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Fail fast before binding if images have nowhere to go
    let bucket = config.bucket_name()?;

    let sdk_config = load_sdk_config(&config.aws).await;
    let inference: Arc<dyn InferenceClient> = Arc::new(BedrockInferenceClient::from_sdk_config(
        &sdk_config,
        config.aws.bedrock_endpoint_url.as_deref(),
    ));
    let store = Arc::new(S3ObjectStore::from_sdk_config(
        &sdk_config,
        config.aws.s3_endpoint_url.as_deref(),
        config.aws.force_path_style,
    ));

    let state = AppState {
        text: Arc::new(TextHandler::new(inference.clone(), config.text.clone())),
        image: Arc::new(ImageHandler::new(
            inference,
            store,
            config.image.clone(),
            bucket,
        )),
    };

    let app = router(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
