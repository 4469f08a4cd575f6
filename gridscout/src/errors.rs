//! Error types for gridscout.
//!
//! Everything that can go wrong happens before the worker pool is built:
//! reading the puzzle, validating the grid, loading configuration, or writing
//! the report afterwards. A word that cannot be found is not an error; it is
//! recorded as a normal not-found [`crate::results::WordMatch`].
//!
//! ```rust,ignore
//! match load_puzzle(path) {
//!     Ok(puzzle) => // Run the search,
//!     Err(SearchError::FileNotFound(path)) => // Handle missing input,
//!     Err(SearchError::MalformedGrid(msg)) => // Refuse to search,
//!     Err(e) => // Handle other errors
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while loading, searching or reporting a puzzle
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SearchError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn malformed_grid(msg: impl Into<String>) -> Self {
        Self::MalformedGrid(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Maps an I/O error on `path` to the most specific variant
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::IoError(err),
        }
    }
}

impl From<::config::ConfigError> for SearchError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_error_creation() {
        let path = Path::new("puzzle.txt");
        let err = SearchError::file_not_found(path);
        assert!(matches!(err, SearchError::FileNotFound(_)));

        let err = SearchError::permission_denied(path);
        assert!(matches!(err, SearchError::PermissionDenied(_)));

        let err = SearchError::malformed_input("missing header");
        assert!(matches!(err, SearchError::MalformedInput(_)));

        let err = SearchError::malformed_grid("ragged rows");
        assert!(matches!(err, SearchError::MalformedGrid(_)));

        let err = SearchError::config_error("bad thread count");
        assert!(matches!(err, SearchError::ConfigError(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = SearchError::malformed_grid("row 2 has 4 columns, expected 3");
        assert_eq!(
            err.to_string(),
            "Malformed grid: row 2 has 4 columns, expected 3"
        );

        let err = SearchError::malformed_input("row count is not a number");
        assert_eq!(err.to_string(), "Malformed input: row count is not a number");

        let err = SearchError::config_error("Missing required field".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field"
        );

        let err = SearchError::file_not_found("puzzle.txt");
        assert_eq!(err.to_string(), "File not found: puzzle.txt");
    }

    #[test]
    fn test_from_io_picks_specific_variant() {
        let err = SearchError::from_io(io::Error::from(io::ErrorKind::NotFound), "in.txt");
        assert!(matches!(err, SearchError::FileNotFound(_)));

        let err = SearchError::from_io(io::Error::from(io::ErrorKind::PermissionDenied), "in.txt");
        assert!(matches!(err, SearchError::PermissionDenied(_)));

        let err = SearchError::from_io(io::Error::from(io::ErrorKind::Other), "in.txt");
        assert!(matches!(err, SearchError::IoError(_)));
    }
}
