//! Error types for roster operations

use thiserror::Error;

/// Main error type for the roster store and its codec
#[derive(Error, Debug)]
pub enum RosterError {
    /// A required field was empty; the roster was not touched
    #[error("Invalid input: {field} must not be empty")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
    },

    /// Every counter value has been issued
    #[error("No member ids left to allocate")]
    IdsExhausted,

    /// Two members in one document share an id
    #[error("Duplicate member id: {0}")]
    DuplicateId(String),

    /// Encoding or decoding the export document failed
    #[error("Document error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading or writing a document file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = RosterError::InvalidInput { field: "yearRange" };
        assert_eq!(err.to_string(), "Invalid input: yearRange must not be empty");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RosterError = io.into();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
