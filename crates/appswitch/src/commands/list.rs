//! List command - show configured apps, last used first

use anyhow::Result;
use appswitch_core::{order_for_display, ConfiguredApp, KeyValueStore, LAST_SELECTED_APP_KEY};
use camino::Utf8Path;
use tabled::{settings::Style, Table, Tabled};

use super::{load_apps, open_state};
use crate::cli::ListArgs;
use crate::output;

/// Table row for one configured app
#[derive(Tabled, serde::Serialize)]
struct AppRow {
    #[tabled(rename = "")]
    #[serde(skip)]
    marker: String,
    name: String,
    #[tabled(rename = "bundle id")]
    bundle_id: String,
    path: String,
    #[tabled(skip)]
    last_used: bool,
}

fn build_rows(apps: &[ConfiguredApp], last_used: Option<&str>) -> Vec<AppRow> {
    order_for_display(apps, last_used)
        .into_iter()
        .map(|app| {
            let is_last = last_used == Some(app.name.as_str());
            AppRow {
                marker: if is_last { "★".to_string() } else { String::new() },
                bundle_id: app.bundle_id().unwrap_or("-").to_string(),
                name: app.name,
                path: app.path,
                last_used: is_last,
            }
        })
        .collect()
}

pub fn run(args: ListArgs, config: Option<&Utf8Path>) -> Result<()> {
    let (config, apps) = load_apps(config)?;
    let state = open_state()?;
    let last_used = state.last_selected_app()?;
    let rows = build_rows(&apps, last_used.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        output::warning(&format!("No apps configured in {}", config.config_path));
        output::info("Add one with: appswitch config set-app 1 /Applications/Zed.app");
        return Ok(());
    }

    let mut table = Table::new(&rows);
    table.with(Style::sharp());
    println!("{}", table);

    if let (Some(name), Some(at)) = (&last_used, state.updated_at(LAST_SELECTED_APP_KEY)) {
        output::kv("last used", &format!("{} at {}", name, at.format("%Y-%m-%d %H:%M")));
    }
    Ok(())
}
