//! Tool diagnostics for `appswitch doctor`

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::prober::AvailabilityProber;
use crate::runner::CommandRunner;
use crate::tool::ToolSpec;

/// Pre-compiled regex for extracting version numbers from command output
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+(?:\.\d+)?)").expect("version regex is valid"));

/// What `doctor` found out about the association tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDiagnosis {
    /// Tool executable name
    pub tool: &'static str,
    /// What the tool is for
    pub description: &'static str,
    /// Whether any availability probe succeeded
    pub available: bool,
    /// Which probe found it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_by: Option<String>,
    /// Resolved executable path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Reported version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Install guidance
    pub install_hint: String,
    /// Documentation URL
    pub docs_url: &'static str,
}

/// Collects availability, location and version of the association tool
pub struct ToolDoctor {
    tool: &'static ToolSpec,
    prober: AvailabilityProber,
    runner: Arc<dyn CommandRunner>,
    timeout: Duration,
}

impl ToolDoctor {
    /// Create a doctor with the default 5 second version timeout
    pub fn new(tool: &'static ToolSpec, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            tool,
            prober: AvailabilityProber::new(tool, runner.clone()),
            runner,
            timeout: Duration::from_secs(5),
        }
    }

    /// Override the version query timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run every check
    pub async fn diagnose(&self) -> ToolDiagnosis {
        let detected_by = self.prober.detect().await;
        let available = detected_by.is_some();

        let path = if available { self.resolve_path() } else { None };
        let version = match &path {
            Some(p) => self.get_version(p).await,
            None => None,
        };

        ToolDiagnosis {
            tool: self.tool.command,
            description: self.tool.description,
            available,
            detected_by: detected_by.map(|p| p.to_string()),
            path,
            version,
            install_hint: self.tool.install_hint(),
            docs_url: self.tool.docs_url,
        }
    }

    /// Locate the executable on PATH, then in the install directories
    fn resolve_path(&self) -> Option<PathBuf> {
        if let Ok(path) = which::which(self.tool.command) {
            return Some(path);
        }
        self.tool
            .install_dirs
            .iter()
            .map(|dir| Path::new(dir).join(self.tool.command))
            .find(|candidate| candidate.is_file())
    }

    /// Query the tool's version, giving up after the timeout
    async fn get_version(&self, path: &Path) -> Option<String> {
        let program = path.to_string_lossy();
        let args: Vec<String> = self
            .tool
            .version_flag
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let result = tokio::time::timeout(self.timeout, self.runner.run(&program, &args)).await;

        match result {
            Ok(Ok(output)) => {
                // Try stdout first, then stderr
                let text = if output.stdout.trim().is_empty() {
                    output.stderr
                } else {
                    output.stdout
                };
                Some(parse_version(&text)).filter(|v| !v.is_empty())
            }
            Ok(Err(e)) => {
                debug!("Failed to query {} version: {}", self.tool.command, e);
                None
            }
            Err(_) => {
                debug!("Timed out querying {} version", self.tool.command);
                None
            }
        }
    }
}

/// Parse a version number from command output, falling back to the first line
pub fn parse_version(text: &str) -> String {
    VERSION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| text.lines().next().unwrap_or("").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;
    use crate::tool::DUTI;
    use async_trait::async_trait;

    struct NothingInstalled;

    #[async_trait]
    impl CommandRunner for NothingInstalled {
        async fn run(&self, _program: &str, _args: &[String]) -> std::io::Result<CommandOutput> {
            Ok(CommandOutput::failed(1, ""))
        }
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("duti 1.5.4"), "1.5.4");
        assert_eq!(parse_version("v1.5"), "1.5");
        assert_eq!(parse_version("duti (unknown build)\n"), "duti (unknown build)");
        assert_eq!(parse_version(""), "");
    }

    #[test]
    fn test_default_timeout() {
        let doctor = ToolDoctor::new(&DUTI, Arc::new(NothingInstalled));
        assert_eq!(doctor.timeout(), Duration::from_secs(5));

        let doctor = doctor.with_timeout(Duration::from_secs(1));
        assert_eq!(doctor.timeout(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_diagnose_missing_tool() {
        let doctor = ToolDoctor::new(&DUTI, Arc::new(NothingInstalled));
        let diagnosis = doctor.diagnose().await;

        assert!(!diagnosis.available);
        assert!(diagnosis.detected_by.is_none());
        assert!(diagnosis.path.is_none());
        assert!(diagnosis.version.is_none());
        assert_eq!(diagnosis.tool, "duti");
        assert_eq!(diagnosis.description, DUTI.description);
        assert!(diagnosis.description.contains("default applications"));
        assert_eq!(
            diagnosis.install_hint,
            "Install duti with Homebrew: brew install duti"
        );
    }
}
