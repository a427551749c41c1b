//! Batch results and their user-facing rendering

use appswitch_core::ExtensionToken;
use serde::Serialize;

use crate::error::{AssociationError, ExecutionError, FailureKind};

/// Headline for a successful batch
pub const DEFAULT_APP_SET: &str = "Default application set successfully";

/// Outcome of associating one extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationOutcome {
    /// The tool accepted the association
    Succeeded,
    /// Every tool location failed
    Failed(ExecutionError),
}

/// One extension together with its outcome
#[derive(Debug, Clone)]
pub struct ExtensionOutcome {
    pub extension: ExtensionToken,
    pub outcome: AssociationOutcome,
}

/// Aggregated result of one "set default" run
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// True iff at least one extension was valid and succeeded > failed
    pub overall_success: bool,
    /// Extensions the tool accepted
    pub succeeded_count: usize,
    /// Extensions that failed at every tool location
    pub failed_count: usize,
    /// Tokens rejected by validation and never executed
    pub skipped_invalid_tokens: Vec<String>,
    /// `"<ext>: <first line of error>"` per failed extension
    pub failure_messages: Vec<String>,
    /// Per-extension outcomes in input order
    pub outcomes: Vec<ExtensionOutcome>,
    /// Why the batch failed, when it did
    pub failure: Option<AssociationError>,
}

impl BatchResult {
    /// A batch that stopped before running any association
    pub fn rejected(error: AssociationError) -> Self {
        let skipped_invalid_tokens = match &error {
            AssociationError::AllInvalid { invalid } => invalid.clone(),
            _ => Vec::new(),
        };

        Self {
            overall_success: false,
            succeeded_count: 0,
            failed_count: 0,
            skipped_invalid_tokens,
            failure_messages: Vec::new(),
            outcomes: Vec::new(),
            failure: Some(error),
        }
    }

    /// Aggregate settled outcomes using the majority rule
    pub fn from_outcomes(outcomes: Vec<ExtensionOutcome>, skipped_invalid: Vec<String>) -> Self {
        let mut succeeded_count = 0;
        let mut failure_messages = Vec::new();

        for entry in &outcomes {
            match &entry.outcome {
                AssociationOutcome::Succeeded => succeeded_count += 1,
                AssociationOutcome::Failed(err) => {
                    failure_messages.push(format!("{}: {}", entry.extension, err.summary()));
                }
            }
        }

        let failed_count = failure_messages.len();
        let total = outcomes.len();
        let overall_success = total > 0 && succeeded_count > failed_count;

        let failure = if overall_success {
            None
        } else if total == 0 {
            Some(AssociationError::NoExtensions)
        } else {
            Some(AssociationError::MajorityFailed {
                failed: failed_count,
                total,
            })
        };

        Self {
            overall_success,
            succeeded_count,
            failed_count,
            skipped_invalid_tokens: skipped_invalid,
            failure_messages,
            outcomes,
            failure,
        }
    }

    /// Number of valid extensions that were attempted
    pub fn attempted(&self) -> usize {
        self.succeeded_count + self.failed_count
    }

    /// Classification of the failure, if any
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure.as_ref().map(AssociationError::kind)
    }

    /// Single pass/fail headline
    pub fn message(&self) -> String {
        if let Some(error) = &self.failure {
            return error.to_string();
        }
        if self.failed_count > 0 {
            format!("{} ({} failed)", DEFAULT_APP_SET, self.failed_count)
        } else {
            DEFAULT_APP_SET.to_string()
        }
    }

    /// Multi-line detail text
    pub fn details(&self) -> Option<String> {
        let mut details = match &self.failure {
            Some(AssociationError::InvalidBundleId) => return None,
            Some(AssociationError::ToolNotInstalled { install_hint, .. }) => {
                return Some(install_hint.clone())
            }
            Some(AssociationError::NoExtensions) => {
                return Some("No valid file extensions found".to_string())
            }
            Some(AssociationError::AllInvalid { invalid }) => {
                return Some(format!("All extensions are invalid: {}", invalid.join(", ")))
            }
            Some(AssociationError::MajorityFailed { failed, total }) => format!(
                "Failed for {} out of {} extensions.\nErrors:\n{}",
                failed,
                total,
                self.failure_messages.join("\n")
            ),
            None => {
                let mut text = format!(
                    "Successfully set for {} out of {} extensions",
                    self.succeeded_count,
                    self.attempted()
                );
                if !self.failure_messages.is_empty() {
                    text.push_str(&format!("\nFailed: {}", self.failure_messages.join(", ")));
                }
                text
            }
        };

        if !self.skipped_invalid_tokens.is_empty() {
            details.push_str(&format!(
                "\nSkipped invalid: {}",
                self.skipped_invalid_tokens.join(", ")
            ));
        }

        Some(details)
    }

    /// The `{ success, message, details }` triple for presentation
    pub fn to_report(&self) -> DefaultAppReport {
        DefaultAppReport {
            success: self.overall_success,
            message: self.message(),
            details: self.details(),
        }
    }
}

/// Presentation-ready answer to "set as default application"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultAppReport {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&BatchResult> for DefaultAppReport {
    fn from(result: &BatchResult) -> Self {
        result.to_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttemptFailure;
    use appswitch_core::extensions::validate;

    fn outcome(ext: &str, error: Option<&str>) -> ExtensionOutcome {
        ExtensionOutcome {
            extension: validate(&[ext]).valid.remove(0),
            outcome: match error {
                None => AssociationOutcome::Succeeded,
                Some(message) => AssociationOutcome::Failed(ExecutionError {
                    extension: ext.to_string(),
                    attempts: vec![AttemptFailure {
                        path: "/usr/local/bin/duti".to_string(),
                        message: message.to_string(),
                    }],
                }),
            },
        }
    }

    #[test]
    fn test_majority_success_with_one_failure() {
        let result = BatchResult::from_outcomes(
            vec![
                outcome(".js", None),
                outcome(".ts", None),
                outcome(".py", Some("boom\nstack line")),
                outcome(".rs", None),
            ],
            vec![],
        );

        assert!(result.overall_success);
        assert_eq!(result.succeeded_count, 3);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.failure_messages, vec![".py: boom"]);
        assert_eq!(
            result.message(),
            "Default application set successfully (1 failed)"
        );
        assert_eq!(
            result.details().unwrap(),
            "Successfully set for 3 out of 4 extensions\nFailed: .py: boom"
        );
    }

    #[test]
    fn test_minority_success_fails() {
        let result = BatchResult::from_outcomes(
            vec![
                outcome(".js", None),
                outcome(".ts", Some("a")),
                outcome(".py", Some("b")),
            ],
            vec![".bad ext".to_string()],
        );

        assert!(!result.overall_success);
        assert_eq!(result.failure_kind(), Some(FailureKind::Aggregate));
        assert_eq!(result.message(), "Failed to set default application");
        assert_eq!(
            result.details().unwrap(),
            "Failed for 2 out of 3 extensions.\nErrors:\n.ts: a\n.py: b\nSkipped invalid: .bad ext"
        );
    }

    #[test]
    fn test_tie_is_failure() {
        let result = BatchResult::from_outcomes(
            vec![outcome(".js", None), outcome(".ts", Some("nope"))],
            vec![],
        );
        assert!(!result.overall_success);
        assert!(matches!(
            result.failure,
            Some(AssociationError::MajorityFailed { failed: 1, total: 2 })
        ));
    }

    #[test]
    fn test_clean_success_reports_skipped() {
        let result = BatchResult::from_outcomes(
            vec![outcome(".js", None)],
            vec![".a.b".to_string(), ".c d".to_string()],
        );
        let report = result.to_report();
        assert!(report.success);
        assert_eq!(report.message, DEFAULT_APP_SET);
        assert_eq!(
            report.details.as_deref(),
            Some("Successfully set for 1 out of 1 extensions\nSkipped invalid: .a.b, .c d")
        );
    }

    #[test]
    fn test_empty_outcomes_never_succeed() {
        let result = BatchResult::from_outcomes(vec![], vec![]);
        assert!(!result.overall_success);
        assert_eq!(result.failure, Some(AssociationError::NoExtensions));
    }

    #[test]
    fn test_rejected_reports() {
        let report = BatchResult::rejected(AssociationError::InvalidBundleId).to_report();
        assert!(!report.success);
        assert_eq!(report.message, "Invalid app bundle ID");
        assert_eq!(report.details, None);

        let result = BatchResult::rejected(AssociationError::AllInvalid {
            invalid: vec![".a b".to_string(), "..c".to_string()],
        });
        assert_eq!(result.skipped_invalid_tokens.len(), 2);
        assert_eq!(
            result.details().as_deref(),
            Some("All extensions are invalid: .a b, ..c")
        );
        assert_eq!(result.message(), "Failed to parse file extensions");
    }

    #[test]
    fn test_report_serializes_without_empty_details() {
        let report = BatchResult::rejected(AssociationError::InvalidBundleId).to_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("details").is_none());
    }
}
