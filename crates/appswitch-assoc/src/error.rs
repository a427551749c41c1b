//! Error types for the association pipeline
//!
//! None of these escape [`crate::BatchOrchestrator::register_default`]:
//! they are folded into the returned [`crate::BatchResult`] so callers
//! always receive one structured answer.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Broad classification of a batch failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Bad input: missing bundle id, no usable extensions
    Configuration,
    /// The association tool is not installed
    Environment,
    /// Most extensions in the batch failed to associate
    Aggregate,
}

/// Why a batch did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssociationError {
    /// Bundle identifier was empty
    #[error("Invalid app bundle ID")]
    InvalidBundleId,

    /// The association tool could not be found by any probe
    #[error("{message}")]
    ToolNotInstalled {
        /// Headline including the install command
        message: String,
        /// Longer install guidance
        install_hint: String,
    },

    /// The extension list contained no tokens at all
    #[error("Failed to parse file extensions")]
    NoExtensions,

    /// Every token in the extension list was invalid
    #[error("Failed to parse file extensions")]
    AllInvalid {
        /// The rejected tokens
        invalid: Vec<String>,
    },

    /// Failures did not leave succeeded strictly ahead
    #[error("Failed to set default application")]
    MajorityFailed {
        /// Number of extensions that failed
        failed: usize,
        /// Number of valid extensions attempted
        total: usize,
    },
}

impl AssociationError {
    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidBundleId | Self::NoExtensions | Self::AllInvalid { .. } => {
                FailureKind::Configuration
            }
            Self::ToolNotInstalled { .. } => FailureKind::Environment,
            Self::MajorityFailed { .. } => FailureKind::Aggregate,
        }
    }
}

/// One failed invocation of the tool at a single location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptFailure {
    /// Tool location that was invoked
    pub path: String,
    /// Error text from that invocation
    pub message: String,
}

/// An extension could not be associated at any tool location
///
/// Displays as the message of the last attempt; earlier attempts are
/// kept in `attempts` for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionError {
    /// The extension being associated
    pub extension: String,
    /// Every failed attempt, in the order tried
    pub attempts: Vec<AttemptFailure>,
}

impl ExecutionError {
    /// Message of the last attempt
    pub fn last_message(&self) -> &str {
        self.attempts
            .last()
            .map(|a| a.message.as_str())
            .unwrap_or("Failed to execute association command")
    }

    /// First line of the last attempt's message
    pub fn summary(&self) -> &str {
        first_line(self.last_message())
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.last_message())
    }
}

impl std::error::Error for ExecutionError {}

/// First line of a possibly multi-line message, trimmed
pub(crate) fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(path: &str, message: &str) -> AttemptFailure {
        AttemptFailure {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_execution_error_surfaces_last_attempt() {
        let err = ExecutionError {
            extension: ".rs".to_string(),
            attempts: vec![
                attempt("duti", "not found"),
                attempt("/usr/local/bin/duti", "line one\nline two"),
            ],
        };
        assert_eq!(err.to_string(), "line one\nline two");
        assert_eq!(err.summary(), "line one");
    }

    #[test]
    fn test_execution_error_without_attempts() {
        let err = ExecutionError {
            extension: ".rs".to_string(),
            attempts: vec![],
        };
        assert_eq!(err.to_string(), "Failed to execute association command");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            AssociationError::InvalidBundleId.kind(),
            FailureKind::Configuration
        );
        assert_eq!(
            AssociationError::AllInvalid { invalid: vec![] }.kind(),
            FailureKind::Configuration
        );
        assert_eq!(
            AssociationError::ToolNotInstalled {
                message: String::new(),
                install_hint: String::new(),
            }
            .kind(),
            FailureKind::Environment
        );
        assert_eq!(
            AssociationError::MajorityFailed { failed: 2, total: 3 }.kind(),
            FailureKind::Aggregate
        );
    }
}
