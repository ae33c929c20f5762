use genai_relay::{
    aws::load_sdk_config, config, handlers::TextHandler, inference::BedrockInferenceClient,
    lambda, telemetry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let config = config::load().await?;
    telemetry::init(&config.server.logs.level)?;

    let sdk_config = load_sdk_config(&config.aws).await;
    let client = BedrockInferenceClient::from_sdk_config(
        &sdk_config,
        config.aws.bedrock_endpoint_url.as_deref(),
    );

    info!("Text handler ready, model: {}", config.text.model_id);

    lambda::serve(TextHandler::new(Arc::new(client), config.text)).await
}
