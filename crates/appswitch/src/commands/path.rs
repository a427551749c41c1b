//! Path command - print a configured app's location

use anyhow::Result;
use camino::Utf8Path;

use super::{load_apps, require_app};
use crate::cli::PathArgs;

pub fn run(args: PathArgs, config: Option<&Utf8Path>) -> Result<()> {
    let (_, apps) = load_apps(config)?;
    let app = require_app(&apps, &args.name)?;
    println!("{}", app.path);
    Ok(())
}
