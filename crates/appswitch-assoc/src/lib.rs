//! appswitch-assoc - default application registration
//!
//! Makes one configured app the default handler for a list of file
//! extensions by driving the external `duti` tool.
//!
//! # Pipeline
//!
//! - **Extension parsing**: comma-separated input is normalized and
//!   validated (see [`appswitch_core::extensions`])
//! - **Availability probing**: PATH and the Homebrew prefixes are checked
//!   before anything runs
//! - **Fallback execution**: each extension is associated by trying the
//!   known tool locations in order
//! - **Batch aggregation**: all extensions run concurrently; the batch
//!   succeeds when more extensions succeeded than failed
//!
//! # Example
//!
//! ```rust,no_run
//! use appswitch_assoc::DefaultApplicationService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = DefaultApplicationService::new();
//!     let report = service
//!         .set_as_default_application("dev.zed.Zed", ".rs,.toml,.md")
//!         .await;
//!
//!     println!("{}", report.message);
//! }
//! ```

mod diagnose;
mod error;
mod executor;
mod orchestrator;
mod prober;
mod report;
mod runner;
mod tool;

pub use diagnose::{parse_version, ToolDiagnosis, ToolDoctor};
pub use error::{AssociationError, AttemptFailure, ExecutionError, FailureKind};
pub use executor::AssociationExecutor;
pub use orchestrator::BatchOrchestrator;
pub use prober::AvailabilityProber;
pub use report::{
    AssociationOutcome, BatchResult, DefaultAppReport, ExtensionOutcome, DEFAULT_APP_SET,
};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use tool::{InstallInstruction, Probe, ToolSpec, DUTI};

use std::sync::Arc;

/// Main entry point for setting default applications
pub struct DefaultApplicationService {
    orchestrator: BatchOrchestrator,
    doctor: ToolDoctor,
}

impl DefaultApplicationService {
    /// Create a service that drives `duti` through real subprocesses
    pub fn new() -> Self {
        Self::with_runner(Arc::new(SystemRunner::new()))
    }

    /// Create a service that drives `duti` through the given runner
    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            orchestrator: BatchOrchestrator::new(&DUTI, runner.clone()),
            doctor: ToolDoctor::new(&DUTI, runner),
        }
    }

    /// Register `bundle_id` for every extension in `extensions` and
    /// return the full batch result
    pub async fn register(&self, bundle_id: &str, extensions: &str) -> BatchResult {
        self.orchestrator.register_default(bundle_id, extensions).await
    }

    /// Register `bundle_id` for every extension in `extensions` and
    /// return the `{ success, message, details }` report
    pub async fn set_as_default_application(
        &self,
        bundle_id: &str,
        extensions: &str,
    ) -> DefaultAppReport {
        self.register(bundle_id, extensions).await.to_report()
    }

    /// Whether the association tool is currently installed
    pub async fn is_tool_available(&self) -> bool {
        self.orchestrator.prober().is_tool_available().await
    }

    /// Availability, location and version of the association tool
    pub async fn diagnose(&self) -> ToolDiagnosis {
        self.doctor.diagnose().await
    }
}

impl Default for DefaultApplicationService {
    fn default() -> Self {
        Self::new()
    }
}
