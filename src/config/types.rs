use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub text: TextGenerationConfig,
    #[serde(default)]
    pub image: ImageGenerationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub aws: AwsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Parameters for the conversational text model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextGenerationConfig {
    #[serde(default = "default_text_model_id")]
    pub model_id: String,
    #[serde(default = "default_anthropic_version")]
    pub anthropic_version: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

/// Parameters for the text-to-image model. The fixed seed keeps output
/// deterministic for a given prompt and model version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationConfig {
    #[serde(default = "default_image_model_id")]
    pub model_id: String,
    #[serde(default = "default_number_of_images")]
    pub number_of_images: u32,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default = "default_cfg_scale")]
    pub cfg_scale: f64,
    #[serde(default = "default_dimension")]
    pub height: u32,
    #[serde(default = "default_dimension")]
    pub width: u32,
    #[serde(default = "default_seed")]
    pub seed: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwsConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub bedrock_endpoint_url: Option<String>,
    #[serde(default)]
    pub s3_endpoint_url: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            model_id: default_text_model_id(),
            anthropic_version: default_anthropic_version(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for ImageGenerationConfig {
    fn default() -> Self {
        Self {
            model_id: default_image_model_id(),
            number_of_images: default_number_of_images(),
            quality: default_quality(),
            cfg_scale: default_cfg_scale(),
            height: default_dimension(),
            width: default_dimension(),
            seed: default_seed(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_text_model_id() -> String {
    "anthropic.claude-3-sonnet-20240229-v1:0".to_string()
}

fn default_anthropic_version() -> String {
    "bedrock-2023-05-31".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_image_model_id() -> String {
    "amazon.nova-canvas-v1:0".to_string()
}

fn default_number_of_images() -> u32 {
    1
}

fn default_quality() -> String {
    "standard".to_string()
}

fn default_cfg_scale() -> f64 {
    8.0
}

fn default_dimension() -> u32 {
    512
}

fn default_seed() -> u32 {
    42
}
