//! # Popup Theme Error Types
//!
//! Errors raised while loading popup menu theme configuration or capturing
//! inherited themes. The theme data itself never fails: absent fields always
//! fall back to caller-supplied defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or propagating popup menu themes.
#[derive(Error, Debug)]
pub enum PopupThemeError {
    /// Theme configuration file was not found.
    #[error("Theme file not found: {path:?}")]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Theme configuration file has an extension we cannot parse.
    #[error("Unsupported theme file format {path:?}, use .toml or .json")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Error parsing a theme configuration file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A color string was not `#rrggbb` or `#rrggbbaa`.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// The context passed as capture boundary is not an ancestor.
    #[error("Capture boundary at depth {boundary_depth} is not an ancestor of the context at depth {depth}")]
    NotAnAncestor {
        /// Depth of the context being captured from.
        depth: usize,
        /// Depth of the requested boundary.
        boundary_depth: usize,
    },

    /// Error serializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for popup theme operations.
pub type PopupThemeResult<T> = Result<T, PopupThemeError>;

impl PopupThemeError {
    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::ParseError {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
