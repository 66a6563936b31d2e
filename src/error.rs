//! Error types for the signup wizard.

/// Top-level error type for the wizard.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors fetching option data from the platform directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Request to {endpoint} failed: {reason}")]
    RequestFailed { endpoint: String, reason: String },

    #[error("Unexpected response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Errors raised while assembling or transmitting a registration.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Registration is not complete: {0}")]
    Incomplete(String),

    #[error("Unknown profession: {0}")]
    UnknownProfession(String),

    #[error("A submission is already in flight")]
    AlreadyPending,

    #[error("Registration rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for the wizard.
pub type Result<T> = std::result::Result<T, Error>;
