//! Doctor command - check for the association tool and summarize the
//! preferences in use

use anyhow::Result;
use appswitch_assoc::{DefaultApplicationService, ToolDiagnosis};
use appswitch_core::{extensions, list_configured_apps, AppSwitchConfig};
use camino::Utf8Path;
use owo_colors::OwoColorize;

use crate::cli::DoctorArgs;
use crate::output;

#[derive(serde::Serialize)]
struct DoctorReport {
    tool: ToolDiagnosis,
    config_path: String,
    config_exists: bool,
    configured_apps: usize,
    apps_without_bundle_id: Vec<String>,
    invalid_extensions: Vec<String>,
}

/// Run the doctor diagnostic command
pub async fn run(args: DoctorArgs, config: Option<&Utf8Path>) -> Result<()> {
    let config = AppSwitchConfig::load(config)?;
    let apps = list_configured_apps(&config.preferences);
    let checked = extensions::parse_and_validate(config.preferences.file_extensions());

    let tool = DefaultApplicationService::new().diagnose().await;
    let report = DoctorReport {
        config_path: config.config_path.to_string(),
        config_exists: config.exists,
        configured_apps: apps.len(),
        apps_without_bundle_id: apps
            .iter()
            .filter(|a| a.bundle_id().is_none())
            .map(|a| a.name.clone())
            .collect(),
        invalid_extensions: checked.invalid,
        tool,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_human(&report);
    }

    if args.ci && !report.tool.available {
        std::process::exit(1);
    }
    Ok(())
}

fn print_human(report: &DoctorReport) {
    let tool = &report.tool;

    output::header("Association tool");
    output::kv("purpose", tool.description);
    if tool.available {
        let version = tool
            .version
            .as_ref()
            .map(|v| format!(" ({})", v))
            .unwrap_or_default();
        println!("  {} {}{}", "✓".green(), tool.tool, version);
        if let Some(path) = &tool.path {
            output::kv("path", &path.display().to_string());
        }
        if let Some(probe) = &tool.detected_by {
            output::kv("detected by", probe);
        }
    } else {
        println!("  {} {} {}", "✗".red(), tool.tool, "not found".dimmed());
        output::kv("install", &tool.install_hint);
        output::kv("docs", tool.docs_url);
    }

    output::header("Preferences");
    let state = if report.config_exists {
        "exists"
    } else {
        "missing, using defaults"
    };
    output::kv("file", &format!("{} ({})", report.config_path, state));
    output::kv("configured apps", &report.configured_apps.to_string());

    if !report.apps_without_bundle_id.is_empty() {
        output::warning(&format!(
            "No bundle id for: {} (set-default will not work for these)",
            report.apps_without_bundle_id.join(", ")
        ));
    }
    if !report.invalid_extensions.is_empty() {
        output::warning(&format!(
            "Invalid file extensions will be skipped: {}",
            report.invalid_extensions.join(", ")
        ));
    }
}
