/// Structured error types for rosterctl-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (rosterctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use thiserror::Error;

/// Main error type for rosterctl-core operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Statement or connection failure reported by the Postgres driver
    #[error("database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for rosterctl-core operations
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RosterError::config("missing database section");
        assert_eq!(
            err.to_string(),
            "configuration error: missing database section"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let roster_err: RosterError = io_err.into();

        assert!(matches!(roster_err, RosterError::Io { .. }));
    }
}
