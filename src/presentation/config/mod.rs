mod config_error;
mod environment;
mod scaffold_config;
mod settings;

pub use config_error::ConfigError;
pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use scaffold_config::{SCAFFOLD_MODE_VARIABLE, ScaffoldConfig};
pub use settings::{
    DatabaseSettings, DocumentIntelligenceSettings, LoggingSettings, OpenAiSettings,
    ServerSettings, Settings, UploadSettings,
};
