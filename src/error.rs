//! Error types for the filestation library.

use std::time::Duration;

use thiserror::Error;

use crate::api::StatusCode;

/// Main error type for File Station operations.
#[derive(Error, Debug)]
pub enum FileStationError {
    /// HTTP request failed with a non-2xx status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error (DNS, connect, TLS, ...).
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body matched neither the expected shape nor the status shape.
    #[error("Invalid response from server: {message}\n{body}")]
    InvalidResponse { message: String, body: String },

    /// File Station returned a non-success status code.
    #[error("Status code: {code} ({})", status.description())]
    Status { code: i64, status: StatusCode },

    /// A step of a recursive folder creation failed.
    #[error("Failed to create sub-folder '{path}' ({created} created before): {source}")]
    FolderCreation {
        path: String,
        created: usize,
        #[source]
        source: Box<FileStationError>,
    },

    /// The caller passed a path the operation cannot work with.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The host could not be turned into a usable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other invalid input (page size, configuration value, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FileStationError {
    /// Build a status error from a raw vendor code.
    pub fn status(code: i64) -> Self {
        FileStationError::Status {
            code,
            status: StatusCode::from(code),
        }
    }

    /// The decoded vendor status, if this is a status error.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            FileStationError::Status { status, .. } => Some(*status),
            FileStationError::FolderCreation { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Check if the server reported an expired or invalid session.
    pub fn is_session_expired(&self) -> bool {
        self.status_code() == Some(StatusCode::AuthFail)
    }

    /// Check if the server denied access to the source or destination.
    pub fn is_permission_denied(&self) -> bool {
        self.status_code().is_some_and(|s| s.is_permission_denied())
    }

    /// Check if the server reported a missing file, folder or directory.
    pub fn is_not_found(&self) -> bool {
        self.status_code().is_some_and(|s| s.is_not_found())
    }
}

/// Result type alias for filestation operations.
pub type Result<T> = std::result::Result<T, FileStationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = FileStationError::status(3);
        assert_eq!(err.to_string(), "Status code: 3 (Session expired)");

        let err = FileStationError::status(777);
        assert_eq!(err.to_string(), "Status code: 777 (Unknown status)");
    }

    #[test]
    fn test_predicates() {
        assert!(FileStationError::status(3).is_session_expired());
        assert!(FileStationError::status(4).is_permission_denied());
        assert!(FileStationError::status(10).is_permission_denied());
        assert!(FileStationError::status(11).is_permission_denied());
        assert!(FileStationError::status(5).is_not_found());
        assert!(FileStationError::status(25).is_not_found());

        let err = FileStationError::FolderCreation {
            path: "/Public/a".to_string(),
            created: 1,
            source: Box::new(FileStationError::status(4)),
        };
        assert!(err.is_permission_denied());

        let err = FileStationError::HttpError(500);
        assert!(!err.is_session_expired());
        assert!(err.status_code().is_none());
    }
}
