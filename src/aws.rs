use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Resolves credentials and region through the default provider chain, with
/// the configured region taking precedence.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        debug!("Using configured AWS region: {}", region);
        loader = loader.region(Region::new(region.clone()));
    }

    loader.load().await
}
