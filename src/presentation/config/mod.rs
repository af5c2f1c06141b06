mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, ExhaustedPolicySetting, LoggingSettings, ServerSettings, Settings,
    StorageSettings, VisionSettings,
};
