//! OS "open path" primitive

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Opens an application (or any path) with the operating system
#[async_trait]
pub trait AppLauncher: Send + Sync {
    /// Open the given path
    async fn open(&self, path: &str) -> Result<()>;
}

/// Launcher that shells out to `open` on macOS and `xdg-open` elsewhere
#[derive(Debug, Clone, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Program used to open paths on this platform
    pub fn program() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }
}

#[async_trait]
impl AppLauncher for SystemLauncher {
    async fn open(&self, path: &str) -> Result<()> {
        debug!("Opening {} with {}", path, Self::program());

        let output = Command::new(Self::program())
            .arg(path)
            .output()
            .await
            .map_err(|e| Error::launch(path, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .next()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("exited with {}", output.status));
            Err(Error::launch(path, message))
        }
    }
}
