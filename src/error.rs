//! Error handling for the file-facing parts of the crate.
//!
//! The analysis itself never fails: missing values, bad dates and empty
//! denominators are all data-shaping decisions. Errors only come from loading
//! records, reading settings and writing results.
//!
//! ```
//! use content_analyser::error::AnalyserError;
//!
//! fn describe(err: &AnalyserError) -> &'static str {
//!     match err {
//!         AnalyserError::Io(_) => "disk",
//!         AnalyserError::Parse(_) => "input",
//!         AnalyserError::UnsupportedFormat(_) => "extension",
//!         _ => "other",
//!     }
//! }
//! # let _ = describe(&AnalyserError::Other("x".to_owned()));
//! ```
//!
//! `ResultExt` adds `.context()` to any result whose error converts into
//! [`AnalyserError`]:
//!
//! ```no_run
//! use content_analyser::error::ResultExt as _;
//!
//! fn load() -> content_analyser::error::Result<String> {
//!     let text = std::fs::read_to_string("catalog.json").context("Failed to load catalogue")?;
//!     Ok(text)
//! }
//! ```

use std::fmt;

/// Main error type for content-analyser operations.
#[derive(Debug)]
pub enum AnalyserError {
    /// I/O errors (file operations)
    Io(std::io::Error),

    /// Input records could not be decoded (JSON or CSV)
    Parse(String),

    /// Settings file errors
    Config(String),

    /// File not found or invalid path
    InvalidPath(String),

    /// File extension we do not read or write
    UnsupportedFormat(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for AnalyserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::UnsupportedFormat(ext) => write!(f, "Unsupported file format: '{ext}'"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AnalyserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalyserError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for AnalyserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyserError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {err}"))
    }
}

impl From<csv::Error> for AnalyserError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(format!("CSV error: {err}"))
    }
}

/// Result type alias for content-analyser operations.
pub type Result<T> = std::result::Result<T, AnalyserError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AnalyserError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: AnalyserError = e.into();
            AnalyserError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: AnalyserError = e.into();
            AnalyserError::Other(format!("{}: {}", f(), err))
        })
    }
}
