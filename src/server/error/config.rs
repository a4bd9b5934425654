use thiserror::Error;

/// Startup configuration problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    ///
    /// Results in a 500 Internal Server Error if it somehow surfaces past
    /// startup; normally the process refuses to boot.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL does not parse.
    #[error("Invalid URL in configuration: {0}")]
    InvalidUrl(String),
}
