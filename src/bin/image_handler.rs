use genai_relay::{
    aws::load_sdk_config, config, handlers::ImageHandler, inference::BedrockInferenceClient,
    lambda, storage::S3ObjectStore, telemetry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = config::load().await?;
    telemetry::init(&config.server.logs.level)?;

    // Refuse to start without a bucket rather than failing every invocation
    let bucket = config.bucket_name()?;

    let sdk_config = load_sdk_config(&config.aws).await;
    let client = BedrockInferenceClient::from_sdk_config(
        &sdk_config,
        config.aws.bedrock_endpoint_url.as_deref(),
    );
    let store = S3ObjectStore::from_sdk_config(
        &sdk_config,
        config.aws.s3_endpoint_url.as_deref(),
        config.aws.force_path_style,
    );

    info!(
        "Image handler ready, model: {}, bucket: {}",
        config.image.model_id, bucket
    );

    lambda::serve(ImageHandler::new(
        Arc::new(client),
        Arc::new(store),
        config.image,
        bucket,
    ))
    .await
}
