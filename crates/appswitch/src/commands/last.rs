//! Last command - re-open the most recently used app

use anyhow::{anyhow, Result};
use appswitch_core::{find_by_name, KeyValueStore};
use camino::Utf8Path;
use tracing::debug;

use super::{launch_and_remember, load_apps, open_state, system_launcher};
use crate::output;

pub async fn run(config: Option<&Utf8Path>) -> Result<()> {
    let (_, apps) = load_apps(config)?;
    let mut state = open_state()?;

    let name = state
        .last_selected_app()?
        .ok_or_else(|| anyhow!("No last app selected. Use `appswitch open` first"))?;
    debug!("Last used app is {}", name);

    let app = find_by_name(&apps, &name)
        .cloned()
        .ok_or_else(|| anyhow!("Last app not configured: {}", name))?;

    launch_and_remember(&app, &system_launcher(), &mut state).await?;
    output::success(&format!("Opened {}", app.name));
    Ok(())
}
