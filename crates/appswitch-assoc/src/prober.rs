//! Tool availability probing
//!
//! Homebrew installs to different prefixes on Apple Silicon and Intel
//! machines, and PATH inside GUI-launched processes is often minimal, so
//! no single check is reliable. The prober tries each strategy in turn
//! and reports the first one that finds the tool.

use std::sync::Arc;

use tracing::debug;

use crate::runner::CommandRunner;
use crate::tool::{Probe, ToolSpec};

/// Determines whether the association tool is installed
#[derive(Clone)]
pub struct AvailabilityProber {
    tool: &'static ToolSpec,
    runner: Arc<dyn CommandRunner>,
}

impl AvailabilityProber {
    /// Create a prober for `tool` using `runner`
    pub fn new(tool: &'static ToolSpec, runner: Arc<dyn CommandRunner>) -> Self {
        Self { tool, runner }
    }

    /// Whether any probe finds the tool
    ///
    /// Never fails: probe errors are logged and the next probe is tried.
    /// Not cached, since the tool may be installed or removed between runs.
    pub async fn is_tool_available(&self) -> bool {
        self.detect().await.is_some()
    }

    /// The first probe that found the tool, if any
    pub async fn detect(&self) -> Option<Probe> {
        for probe in self.tool.probes() {
            let (program, args) = probe.invocation(self.tool);
            match self.runner.run(&program, &args).await {
                Ok(output) if output.success() => {
                    debug!("{} found via {}", self.tool.command, probe);
                    return Some(probe);
                }
                Ok(output) => {
                    debug!(
                        "{} not found via {} ({})",
                        self.tool.command,
                        probe,
                        output.error_text()
                    );
                }
                Err(e) => {
                    debug!("Probe {} for {} failed: {}", probe, self.tool.command, e);
                }
            }
        }

        debug!("{} not found by any probe", self.tool.command);
        None
    }
}
