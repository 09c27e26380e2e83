//! Error types for the run driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a source.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} lexical error(s) reported")]
    Lex { count: usize },
}

impl DriverError {
    /// The process exit code for this error (sysexits: EX_DATAERR, EX_IOERR).
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Io { .. } => 74,
            DriverError::Lex { .. } => 65,
        }
    }
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = DriverError::Io {
            path: PathBuf::from("missing.ori"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(io.exit_code(), 74);
        assert_eq!(io.to_string(), "could not read missing.ori: not found");

        let lex = DriverError::Lex { count: 2 };
        assert_eq!(lex.exit_code(), 65);
        assert_eq!(lex.to_string(), "2 lexical error(s) reported");
    }
}
