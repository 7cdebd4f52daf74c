//! Error types and exit codes for friendship
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (graph contract violation, unknown person)

use thiserror::Error;

/// Exit codes reported by the `friendship` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - rejected graph operation, unknown person (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Contract violations raised by [`crate::FriendshipGraph`].
///
/// All of these are caller faults, detected before any mutation happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex cannot be absent")]
    InvalidArgument,

    #[error("vertex already in graph: {name}")]
    DuplicateVertex { name: String },

    #[error("vertex not in graph: {name}")]
    VertexNotFound { name: String },

    #[error("cannot add self-loop: {name}")]
    SelfLoop { name: String },

    #[error("edge already in graph: {tail} - {head}")]
    DuplicateEdge { tail: String, head: String },
}

impl GraphError {
    pub fn duplicate_vertex(name: impl Into<String>) -> Self {
        GraphError::DuplicateVertex { name: name.into() }
    }

    pub fn vertex_not_found(name: impl Into<String>) -> Self {
        GraphError::VertexNotFound { name: name.into() }
    }

    pub fn self_loop(name: impl Into<String>) -> Self {
        GraphError::SelfLoop { name: name.into() }
    }

    pub fn duplicate_edge(tail: impl Into<String>, head: impl Into<String>) -> Self {
        GraphError::DuplicateEdge {
            tail: tail.into(),
            head: head.into(),
        }
    }

    /// Stable identifier used in JSON error output
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidArgument => "invalid_argument",
            GraphError::DuplicateVertex { .. } => "duplicate_vertex",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::DuplicateEdge { .. } => "duplicate_edge",
        }
    }
}

/// Errors that can occur while running friendship operations
#[derive(Error, Debug)]
pub enum FriendshipError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("unknown person: {name}")]
    UnknownPerson { name: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FriendshipError {
    pub fn unknown_person(name: impl Into<String>) -> Self {
        FriendshipError::UnknownPerson { name: name.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FriendshipError::UsageError(_) => ExitCode::Usage,
            FriendshipError::Graph(_) | FriendshipError::UnknownPerson { .. } => ExitCode::Data,
            FriendshipError::Io(_)
            | FriendshipError::Toml(_)
            | FriendshipError::Json(_) => ExitCode::Failure,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            FriendshipError::UsageError(_) => "usage_error",
            FriendshipError::Graph(err) => err.error_type(),
            FriendshipError::UnknownPerson { .. } => "unknown_person",
            FriendshipError::Io(_) => "io_error",
            FriendshipError::Toml(_) => "toml_error",
            FriendshipError::Json(_) => "json_error",
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

/// Result type alias for friendship operations
pub type Result<T> = std::result::Result<T, FriendshipError>;
