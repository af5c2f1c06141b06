use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::PLACEHOLDER_CAPTION;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub vision: VisionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionSettings {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub on_exhausted: ExhaustedPolicySetting,
    pub placeholder_caption: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustedPolicySetting {
    Placeholder,
    Fail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{env}.*`, `APP__SECTION__KEY`
    /// variables and finally `AZURE_VISION_ENDPOINT` / `AZURE_VISION_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("server.max_upload_mb", 10_i64)?
            .set_default("database.max_connections", 10_i64)?
            .set_default("storage.local_path", "media")?
            .set_default("vision.timeout_secs", 20_i64)?
            .set_default("vision.on_exhausted", "placeholder")?
            .set_default("vision.placeholder_caption", PLACEHOLDER_CAPTION)?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .set_override_option("vision.endpoint", std::env::var("AZURE_VISION_ENDPOINT").ok())?
            .set_override_option("vision.api_key", std::env::var("AZURE_VISION_KEY").ok())?
            .build()?
            .try_deserialize()
    }
}
