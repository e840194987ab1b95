#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
    #[error("missing credential: {0} is not configured")]
    MissingCredential(&'static str),
}
