//! Error handling for tabspan
//!
//! This module provides a unified error type and result type for every
//! stage of a render pass: loading, span bookkeeping, configuration and
//! the hand-off to the external renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Table pipeline error type
#[derive(Debug, Error)]
pub enum TableError {
    /// No usable rows remained after parsing
    #[error("Empty input: no non-empty rows found")]
    EmptyInput,

    /// Input could not be split into records
    ///
    /// The TSV reader is flexible and unquoted, so text input does not
    /// produce this today. Kept so a reader error is reported with its line
    /// instead of being dropped.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A merge column points past the header's last column
    #[error("Merge column {column} is out of range for a table with {width} column(s)")]
    MergeColumnOutOfRange { column: usize, width: usize },

    /// A built row does not resolve to the header's column count
    #[error("Column count mismatch at row {row}: expected {expected}, found {actual}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A row span reaches past the last row of the table
    #[error("Row span in column {column} runs {remaining} row(s) past the end of the table")]
    SpanOverrun { column: usize, remaining: usize },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error (for file and process operations)
    #[error("IO error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// External renderer program is not installed
    #[error("Renderer program '{program}' was not found on PATH")]
    RendererNotFound { program: String },

    /// External renderer exited unsuccessfully
    #[error("Renderer '{program}' failed with {status}: {stderr}")]
    Render {
        program: String,
        status: String,
        stderr: String,
    },

    /// Renderer finished but produced no image
    #[error("Renderer produced no image in {}", .dir.display())]
    NoImageProduced { dir: PathBuf },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn config(message: impl Into<String>) -> Self {
        TableError::Config {
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        TableError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn mismatch(row: usize, expected: usize, actual: usize) -> Self {
        TableError::ColumnCountMismatch {
            row,
            expected,
            actual,
        }
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        TableError::Parse {
            line,
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TableError {
    fn from(err: toml::de::Error) -> Self {
        TableError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let err = TableError::mismatch(3, 4, 5);
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("found 5"));
    }

    #[test]
    fn test_empty_input_display() {
        assert!(TableError::EmptyInput.to_string().contains("Empty input"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = TableError::io(
            "reading table",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("reading table"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_csv_error_keeps_line() {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_reader("a\tb\nc\n".as_bytes());
        let err = reader
            .records()
            .find_map(Result::err)
            .expect("ragged input fails a strict reader");

        let err: TableError = err.into();
        assert!(matches!(err, TableError::Parse { line: 2, .. }));
        assert!(err.to_string().starts_with("Parse error at line 2"));
    }

    #[test]
    fn test_toml_error_becomes_config() {
        let parsed: Result<toml::Value, _> = toml::from_str("= broken");
        let err: TableError = parsed.unwrap_err().into();
        assert!(matches!(err, TableError::Config { .. }));
    }
}
