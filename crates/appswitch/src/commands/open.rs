//! Open command - launch a configured app by name

use anyhow::Result;
use camino::Utf8Path;

use super::{launch_and_remember, load_apps, open_state, require_app, system_launcher};
use crate::cli::OpenArgs;
use crate::output;

pub async fn run(args: OpenArgs, config: Option<&Utf8Path>) -> Result<()> {
    let (_, apps) = load_apps(config)?;
    let app = require_app(&apps, &args.name)?;
    let mut state = open_state()?;

    launch_and_remember(&app, &system_launcher(), &mut state).await?;
    output::success(&format!("Opened {}", app.name));
    Ok(())
}
