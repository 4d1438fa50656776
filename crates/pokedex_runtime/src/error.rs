//! Errors raised while configuring and running the Pokedex runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line arguments could not be parsed.
    #[error("invalid arguments: {0}")]
    Config(String),

    /// A concept rejected an operation.
    #[error(transparent)]
    Concept(#[from] pokedex_foundation::Error),

    /// The global logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl Error {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
