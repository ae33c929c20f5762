mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml` when present) and
/// applies environment overrides on top.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from_path(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_env_overrides(|key| env::var(key).ok());

    Ok(config)
}

pub async fn load_from_path(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides file values with the variables a Lambda deployment sets.
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(bucket) = get("S3_BUCKET_NAME") {
            self.storage.bucket = Some(bucket);
        }
        if let Some(model_id) = get("TEXT_MODEL_ID") {
            self.text.model_id = model_id;
        }
        if let Some(model_id) = get("IMAGE_MODEL_ID") {
            self.image.model_id = model_id;
        }
        if let Some(region) = get("AWS_REGION") {
            self.aws.region = Some(region);
        }
        if let Some(url) = get("BEDROCK_ENDPOINT_URL") {
            self.aws.bedrock_endpoint_url = Some(url);
        }
        if let Some(url) = get("S3_ENDPOINT_URL") {
            self.aws.s3_endpoint_url = Some(url);
        }
    }

    /// The bucket generated images are written to. Required by the image handler.
    pub fn bucket_name(&self) -> Result<String> {
        self.storage
            .bucket
            .as_deref()
            .map(str::trim)
            .filter(|bucket| !bucket.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::config(
                    "S3_BUCKET_NAME is not set; the image handler needs a bucket to store images",
                )
            })
    }
}
