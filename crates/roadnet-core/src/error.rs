//! Error types and exit codes for roadnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags, unknown strategy, malformed condition)
//! - 3: Data error (missing network file, unknown city, invalid network)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad network file or city reference (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roadnet operations
#[derive(Error, Debug)]
pub enum RoadnetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or dot)")]
    UnknownFormat(String),

    #[error("invalid strategy '{tag}' (expected: breadth-first, bfs, depth-first, dfs)")]
    InvalidStrategy { tag: String },

    #[error("invalid road condition '{condition}': {reason}")]
    InvalidCondition { condition: String, reason: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("network file not found (searched {searched:?})")]
    NetworkNotFound { searched: PathBuf },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    #[error("city not found: {city}")]
    NodeNotFound { city: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadnetError {
    /// Create an error for an unknown strategy tag
    pub fn invalid_strategy(tag: impl std::fmt::Display) -> Self {
        RoadnetError::InvalidStrategy {
            tag: tag.to_string(),
        }
    }

    /// Create an error for a malformed road condition
    pub fn invalid_condition(
        condition: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        RoadnetError::InvalidCondition {
            condition: condition.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a city missing from the network
    pub fn node_not_found(city: impl std::fmt::Display) -> Self {
        RoadnetError::NodeNotFound {
            city: city.to_string(),
        }
    }

    /// Create an error for a structurally invalid network
    pub fn invalid_network(reason: impl std::fmt::Display) -> Self {
        RoadnetError::InvalidNetwork {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadnetError::UnknownFormat(_)
            | RoadnetError::InvalidStrategy { .. }
            | RoadnetError::InvalidCondition { .. }
            | RoadnetError::UsageError(_) => ExitCode::Usage,

            RoadnetError::NetworkNotFound { .. }
            | RoadnetError::InvalidNetwork { .. }
            | RoadnetError::NodeNotFound { .. } => ExitCode::Data,

            RoadnetError::Io(_)
            | RoadnetError::Json(_)
            | RoadnetError::Toml(_)
            | RoadnetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoadnetError::UnknownFormat(_) => "unknown_format",
            RoadnetError::InvalidStrategy { .. } => "invalid_strategy",
            RoadnetError::InvalidCondition { .. } => "invalid_condition",
            RoadnetError::UsageError(_) => "usage_error",
            RoadnetError::NetworkNotFound { .. } => "network_not_found",
            RoadnetError::InvalidNetwork { .. } => "invalid_network",
            RoadnetError::NodeNotFound { .. } => "node_not_found",
            RoadnetError::Io(_) => "io_error",
            RoadnetError::Json(_) => "json_error",
            RoadnetError::Toml(_) => "toml_error",
            RoadnetError::Other(_) => "other",
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
}

/// Result type alias for roadnet operations
pub type Result<T> = std::result::Result<T, RoadnetError>;
