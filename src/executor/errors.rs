//! Executor error types
//!
//! Error codes:
//! - QUERY_INVALID_PARAMETER
//! - QUERY_INVALID_REQUEST
//! - QUERY_SINK_FAILED
//!
//! "No matches" is never an error: an empty row set is a normal result.

use thiserror::Error;

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Errors raised while validating or running a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    /// A caller-supplied parameter violates its precondition
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A query request could not be understood
    #[error("invalid query request: {0}")]
    InvalidRequest(String),

    /// The result sink refused the output
    #[error("result sink failed: {0}")]
    Sink(String),
}

impl ExecutorError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        ExecutorError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        ExecutorError::InvalidRequest(reason.into())
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorError::InvalidParameter { .. } => "QUERY_INVALID_PARAMETER",
            ExecutorError::InvalidRequest(_) => "QUERY_INVALID_REQUEST",
            ExecutorError::Sink(_) => "QUERY_SINK_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ExecutorError::invalid_parameter("cheap_boundary", "x").code(),
            "QUERY_INVALID_PARAMETER"
        );
        assert_eq!(
            ExecutorError::invalid_request("bad json").code(),
            "QUERY_INVALID_REQUEST"
        );
        assert_eq!(ExecutorError::Sink("closed".into()).code(), "QUERY_SINK_FAILED");
    }

    #[test]
    fn test_error_display() {
        let err = ExecutorError::invalid_parameter(
            "cheap_boundary",
            "must be below middle_boundary",
        );
        let display = err.to_string();
        assert!(display.contains("cheap_boundary"));
        assert!(display.contains("must be below"));
    }
}
