//! Error types for user-facing operations
//!
//! Generation and map manipulation never fail; errors only arise at the
//! boundary where a user action is validated, exported or undone.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all user-facing operations
#[derive(Debug)]
pub enum WordTileError {
    /// User-supplied value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation needs a selection that is missing or empty
    EmptySelection {
        /// What was missing
        reason: &'static str,
    },

    /// Undo or redo requested with no step available
    ///
    /// Expected steady state rather than a fault; state is left unchanged.
    HistoryExhausted {
        /// Either "undo" or "redo"
        action: &'static str,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Logger could not be installed
    Logging {
        /// Description reported by the logger backend
        reason: String,
    },
}

impl fmt::Display for WordTileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptySelection { reason } => write!(f, "Nothing selected: {reason}"),
            Self::HistoryExhausted { action } => {
                if *action == "redo" {
                    write!(f, "No redo steps available.")
                } else {
                    write!(f, "No more {action} steps.")
                }
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => write!(f, "Failed to initialize logging: {reason}"),
        }
    }
}

impl std::error::Error for WordTileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, WordTileError>;

impl From<image::ImageError> for WordTileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for WordTileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for WordTileError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        Self::Logging {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WordTileError {
    WordTileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a map dimension against the allowed range
///
/// # Errors
///
/// Returns `InvalidParameter` when `value` lies outside
/// `MIN_MAP_DIMENSION..=MAX_MAP_DIMENSION`
pub fn validate_map_dimension(parameter: &'static str, value: usize) -> Result<usize> {
    use crate::io::configuration::{MAX_MAP_DIMENSION, MIN_MAP_DIMENSION};

    if (MIN_MAP_DIMENSION..=MAX_MAP_DIMENSION).contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between {MIN_MAP_DIMENSION} and {MAX_MAP_DIMENSION}"),
        ))
    }
}
