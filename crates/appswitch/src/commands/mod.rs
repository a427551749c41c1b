//! CLI command implementations

pub mod completions;
pub mod config;
pub mod doctor;
pub mod last;
pub mod list;
pub mod open;
pub mod path;
pub mod set_default;

use anyhow::{anyhow, Context, Result};
use appswitch_core::{
    find_by_name, list_configured_apps, AppLauncher, AppSwitchConfig, ConfiguredApp,
    FileStateStore, KeyValueStore, SystemLauncher,
};
use camino::Utf8Path;

/// Load preferences and the configured apps they describe
pub(crate) fn load_apps(config: Option<&Utf8Path>) -> Result<(AppSwitchConfig, Vec<ConfiguredApp>)> {
    let config = AppSwitchConfig::load(config).context("Failed to load preferences")?;
    let apps = list_configured_apps(&config.preferences);
    Ok((config, apps))
}

/// Look up a configured app by name, listing the alternatives on a miss
pub(crate) fn require_app(apps: &[ConfiguredApp], name: &str) -> Result<ConfiguredApp> {
    find_by_name(apps, name).cloned().ok_or_else(|| {
        if apps.is_empty() {
            anyhow!("No apps configured. Add one with `appswitch config set-app <slot> <path>`")
        } else {
            let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
            anyhow!("No configured app named '{}' (available: {})", name, names.join(", "))
        }
    })
}

/// Open the state store at its default location
pub(crate) fn open_state() -> Result<FileStateStore> {
    FileStateStore::open_default().context("Failed to open appswitch state")
}

/// Open `app` and record it as the last used app
///
/// The state is only written after the app opened successfully.
pub(crate) async fn launch_and_remember(
    app: &ConfiguredApp,
    launcher: &dyn AppLauncher,
    state: &mut dyn KeyValueStore,
) -> Result<()> {
    launcher
        .open(&app.path)
        .await
        .with_context(|| format!("Could not open {}.", app.name))?;

    state
        .remember_selected_app(&app.name)
        .context("Failed to record last used app")?;
    Ok(())
}

/// Launcher used by the open/last commands
pub(crate) fn system_launcher() -> SystemLauncher {
    SystemLauncher::new()
}
