use derive_more::{Display, Error, From};

/// Failure while loading authorizer settings.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The settings document is not valid JSON or has unexpected fields.
    #[display("invalid authorizer settings: {_0}")]
    Parse(serde_json::Error),
}
