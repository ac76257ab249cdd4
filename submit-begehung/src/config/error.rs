//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating the function configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are missing or empty.
    #[error("GitHub-Konfiguration unvollständig. Bitte Environment-Variablen prüfen.")]
    Incomplete {
        /// Names of the missing variables, for logging.
        missing: Vec<&'static str>,
    },
}
