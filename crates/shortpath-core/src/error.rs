//! Error types and exit codes for shortpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, bad graph file, no path)

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
    /// Data error - unknown node, malformed graph, no path (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or solving queries
#[derive(Error, Debug)]
pub enum ShortpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("node already exists: {node}")]
    DuplicateNode { node: String },

    #[error("negative weight {weight} on edge {from} -- {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("weight {weight} on edge {from} -- {to} exceeds the maximum of {max}")]
    WeightTooLarge {
        from: String,
        to: String,
        weight: i64,
        max: u64,
    },

    #[error("edge not found: {from} -- {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("no path from {start} to {target}")]
    NoPath { start: String, target: String },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("search interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl ShortpathError {
    /// Create an error for a node label that is not registered
    pub fn node_not_found(node: impl std::fmt::Display) -> Self {
        ShortpathError::NodeNotFound {
            node: node.to_string(),
        }
    }

    /// Create an error for a node label registered twice
    pub fn duplicate_node(node: impl std::fmt::Display) -> Self {
        ShortpathError::DuplicateNode {
            node: node.to_string(),
        }
    }

    /// Create an error for a rejected negative edge weight
    pub fn negative_weight(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        weight: i64,
    ) -> Self {
        ShortpathError::NegativeWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    /// Create an error for an edge weight above the accepted maximum
    pub fn weight_too_large(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        weight: i64,
        max: u64,
    ) -> Self {
        ShortpathError::WeightTooLarge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            max,
        }
    }

    /// Create an error for a missing edge between two known nodes
    pub fn edge_not_found(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        ShortpathError::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a query whose target cannot be reached
    pub fn no_path(start: impl std::fmt::Display, target: impl std::fmt::Display) -> Self {
        ShortpathError::NoPath {
            start: start.to_string(),
            target: target.to_string(),
        }
    }

    /// Create an error for a graph file that could not be interpreted
    pub fn invalid_graph_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ShortpathError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ShortpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShortpathError::UnknownFormat(_)
            | ShortpathError::UsageError(_)
            | ShortpathError::InvalidValue { .. } => ExitCode::Usage,

            ShortpathError::NodeNotFound { .. }
            | ShortpathError::DuplicateNode { .. }
            | ShortpathError::NegativeWeight { .. }
            | ShortpathError::WeightTooLarge { .. }
            | ShortpathError::EdgeNotFound { .. }
            | ShortpathError::NoPath { .. }
            | ShortpathError::InvalidGraphFile { .. } => ExitCode::Data,

            ShortpathError::Io(_)
            | ShortpathError::Json(_)
            | ShortpathError::Toml(_)
            | ShortpathError::Interrupted
            | ShortpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortpathError::UnknownFormat(_) => "unknown_format",
            ShortpathError::UsageError(_) => "usage_error",
            ShortpathError::InvalidValue { .. } => "invalid_value",
            ShortpathError::NodeNotFound { .. } => "node_not_found",
            ShortpathError::DuplicateNode { .. } => "duplicate_node",
            ShortpathError::NegativeWeight { .. } => "negative_weight",
            ShortpathError::WeightTooLarge { .. } => "weight_too_large",
            ShortpathError::EdgeNotFound { .. } => "edge_not_found",
            ShortpathError::NoPath { .. } => "no_path",
            ShortpathError::InvalidGraphFile { .. } => "invalid_graph_file",
            ShortpathError::Io(_) => "io_error",
            ShortpathError::Json(_) => "json_error",
            ShortpathError::Toml(_) => "toml_error",
            ShortpathError::Interrupted => "interrupted",
            ShortpathError::Other(_) => "other",
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

/// Result type alias for shortpath operations
pub type Result<T> = std::result::Result<T, ShortpathError>;
