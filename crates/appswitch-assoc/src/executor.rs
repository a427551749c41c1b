//! Association executor
//!
//! Sets the default handler for one extension, trying each known tool
//! location in a fixed order until one invocation succeeds.

use std::sync::Arc;

use appswitch_core::ExtensionToken;
use tracing::{debug, info};

use crate::error::{AttemptFailure, ExecutionError};
use crate::runner::CommandRunner;
use crate::tool::ToolSpec;

/// Runs the association tool for single (bundle id, extension) pairs
#[derive(Clone)]
pub struct AssociationExecutor {
    tool: &'static ToolSpec,
    runner: Arc<dyn CommandRunner>,
}

impl AssociationExecutor {
    /// Create an executor for `tool` using `runner`
    pub fn new(tool: &'static ToolSpec, runner: Arc<dyn CommandRunner>) -> Self {
        Self { tool, runner }
    }

    /// Make `bundle_id` the handler for `extension` in every role
    ///
    /// Tries the bare command, then each install directory, stopping at the
    /// first zero exit. When every location fails the returned error
    /// displays the last attempt's message and carries all attempts.
    /// A successful call changes OS association state and cannot be undone
    /// from here.
    pub async fn associate(
        &self,
        bundle_id: &str,
        extension: &ExtensionToken,
    ) -> Result<(), ExecutionError> {
        let args = self.tool.association_args(bundle_id, extension.as_str());
        let mut attempts = Vec::new();

        for path in self.tool.candidate_paths() {
            match self.runner.run(&path, &args).await {
                Ok(output) if output.success() => {
                    info!("Set {} as handler for {} via {}", bundle_id, extension, path);
                    return Ok(());
                }
                Ok(output) => {
                    let message = output.error_text();
                    debug!("{} failed for {}: {}", path, extension, message);
                    attempts.push(AttemptFailure { path, message });
                }
                Err(e) => {
                    let message = format!("Failed to run {}: {}", path, e);
                    debug!("{}", message);
                    attempts.push(AttemptFailure { path, message });
                }
            }
        }

        Err(ExecutionError {
            extension: extension.to_string(),
            attempts,
        })
    }
}
