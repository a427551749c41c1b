//! Batch orchestrator
//!
//! Validates the request, checks the tool is present, then associates
//! every valid extension concurrently and folds the settled outcomes into
//! one [`BatchResult`]. Partial failure is expected: all calls run to
//! completion and nothing is cancelled early.

use std::sync::Arc;

use appswitch_core::extensions;
use futures::future::join_all;
use tracing::{info, warn};

use crate::error::AssociationError;
use crate::executor::AssociationExecutor;
use crate::prober::AvailabilityProber;
use crate::report::{AssociationOutcome, BatchResult, ExtensionOutcome};
use crate::runner::CommandRunner;
use crate::tool::ToolSpec;

/// Runs "set as default" for a whole extension list
#[derive(Clone)]
pub struct BatchOrchestrator {
    tool: &'static ToolSpec,
    prober: AvailabilityProber,
    executor: AssociationExecutor,
}

impl BatchOrchestrator {
    /// Create an orchestrator for `tool` sharing one runner between the
    /// prober and the executor
    pub fn new(tool: &'static ToolSpec, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            tool,
            prober: AvailabilityProber::new(tool, runner.clone()),
            executor: AssociationExecutor::new(tool, runner),
        }
    }

    /// The prober used for the availability check
    pub fn prober(&self) -> &AvailabilityProber {
        &self.prober
    }

    /// Register `bundle_id` as the handler for every valid extension in
    /// `raw_extensions`
    ///
    /// Early exits, in order: empty bundle id, tool not installed, nothing
    /// parsed, nothing valid. Never returns an error; every failure is
    /// described by the result.
    pub async fn register_default(&self, bundle_id: &str, raw_extensions: &str) -> BatchResult {
        let bundle_id = bundle_id.trim();
        if bundle_id.is_empty() {
            return BatchResult::rejected(AssociationError::InvalidBundleId);
        }

        if !self.prober.is_tool_available().await {
            warn!("{} is not installed", self.tool.command);
            return BatchResult::rejected(AssociationError::ToolNotInstalled {
                message: self.tool.not_installed_message(),
                install_hint: self.tool.install_hint(),
            });
        }

        let tokens = extensions::parse(raw_extensions);
        if tokens.is_empty() {
            return BatchResult::rejected(AssociationError::NoExtensions);
        }

        let validated = extensions::validate(&tokens);
        if validated.valid.is_empty() {
            return BatchResult::rejected(AssociationError::AllInvalid {
                invalid: validated.invalid,
            });
        }
        if !validated.invalid.is_empty() {
            warn!("Skipping invalid extensions: {}", validated.invalid.join(", "));
        }

        info!(
            "Associating {} extension(s) with {}",
            validated.valid.len(),
            bundle_id
        );

        let calls = validated.valid.into_iter().map(|extension| async move {
            let outcome = match self.executor.associate(bundle_id, &extension).await {
                Ok(()) => AssociationOutcome::Succeeded,
                Err(err) => {
                    warn!("Could not associate {}: {}", extension, err.summary());
                    AssociationOutcome::Failed(err)
                }
            };
            ExtensionOutcome { extension, outcome }
        });
        let outcomes = join_all(calls).await;

        let result = BatchResult::from_outcomes(outcomes, validated.invalid);
        info!(
            "Association finished: {} succeeded, {} failed",
            result.succeeded_count, result.failed_count
        );
        result
    }
}
