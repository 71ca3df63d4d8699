use std::env::VarError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Represents an error related to environment variables.
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] VarError),

    /// A value could not be parsed into its target type.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Values parsed fine but do not make a usable configuration together.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
