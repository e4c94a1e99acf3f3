//! Import error types.
//!
//! Every variant ends up as the same "Failed to read file." notice on screen.
//! The variants exist so the log says what actually went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a spreadsheet.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The selected file could not be read
    #[error("Cannot read file '{}': {source}", .path.display())]
    Read {
        /// Path of the selected file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The content is neither a workbook nor delimited text
    #[error("Unrecognized spreadsheet format: {0}")]
    Workbook(#[source] calamine::Error),

    /// The workbook opened but lists no sheets
    #[error("Workbook contains no sheets")]
    NoSheets,

    /// The first sheet could not be decoded
    #[error("Cannot decode first sheet: {0}")]
    Sheet(#[source] calamine::Error),

    /// Delimited text could not be parsed
    #[error("Invalid delimited text: {0}")]
    Csv(#[from] csv::Error),

    /// The background worker could not be started
    #[error("Cannot start import worker: {0}")]
    Worker(#[source] std::io::Error),

    /// The background worker stopped without reporting a result
    #[error("Import worker stopped unexpectedly")]
    Disconnected,
}

/// Create an ImportError from a file path and I/O error.
pub fn from_io_error(path: PathBuf, error: std::io::Error) -> ImportError {
    ImportError::Read {
        path,
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_mentions_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = from_io_error(PathBuf::from("/test/lista.xlsx"), io_error);

        let message = error.to_string();
        assert!(message.contains("/test/lista.xlsx"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = from_io_error(PathBuf::from("/test/lista.xlsx"), io_error);

        let source = error.source().expect("read error should carry its cause");
        assert!(source.to_string().contains("access denied"));
    }

    #[test]
    fn test_disconnected_message() {
        assert_eq!(
            ImportError::Disconnected.to_string(),
            "Import worker stopped unexpectedly"
        );
    }
}
