use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Read-only process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the upstream best sellers endpoint.
    pub upstream_url: String,
    /// Secret key injected into every outbound query.
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            upstream_url: require_var("BEST_SELLERS_API_URL")?,
            api_key: require_var("BEST_SELLERS_API_KEY")?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
