//! Error types and exit codes for graphplay
//!
//! The engine itself never errors on malformed graphs - it degrades to empty
//! results. Errors exist for the CLI surface: bad arguments, unknown
//! algorithms, unreadable graph files.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (missing or invalid graph file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphplay CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or invalid graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphplay operations
#[derive(Error, Debug)]
pub enum GraphplayError {
    // Usage errors (exit code 2)
    #[error("unknown algorithm: {0} (see `graphplay algos` for valid ids)")]
    UnknownAlgorithm(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphplayError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphplayError::UnknownAlgorithm(_)
            | GraphplayError::UnknownFormat(_)
            | GraphplayError::UsageError(_) => ExitCode::Usage,

            GraphplayError::GraphNotFound { .. } | GraphplayError::InvalidGraph { .. } => {
                ExitCode::Data
            }

            GraphplayError::Io(_) | GraphplayError::Json(_) | GraphplayError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphplayError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphplayError::UnknownFormat(_) => "unknown_format",
            GraphplayError::UsageError(_) => "usage_error",
            GraphplayError::GraphNotFound { .. } => "graph_not_found",
            GraphplayError::InvalidGraph { .. } => "invalid_graph",
            GraphplayError::Io(_) => "io_error",
            GraphplayError::Json(_) => "json_error",
            GraphplayError::Other(_) => "other",
        }
    }
}

/// Result type alias for graphplay operations
pub type Result<T> = std::result::Result<T, GraphplayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphplayError::UnknownAlgorithm("x".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            GraphplayError::GraphNotFound {
                path: PathBuf::from("g.json")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphplayError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_json_envelope() {
        let err = GraphplayError::UnknownAlgorithm("a-star".into());
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "unknown_algorithm");
    }
}
