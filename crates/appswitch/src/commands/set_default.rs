//! Set-default command - make a configured app the default handler for
//! a list of file extensions

use anyhow::{anyhow, Result};
use appswitch_assoc::{DefaultApplicationService, FailureKind};
use camino::Utf8Path;
use tracing::{debug, warn};

use super::{load_apps, require_app};
use crate::cli::SetDefaultArgs;
use crate::output;

pub async fn run(args: SetDefaultArgs, config: Option<&Utf8Path>) -> Result<()> {
    let (config, apps) = load_apps(config)?;
    let app = require_app(&apps, &args.name)?;

    let bundle_id = app.bundle_id().ok_or_else(|| {
        anyhow!(
            "App bundle ID not available for {}. Set one with `appswitch config set-app`",
            app.name
        )
    })?;

    let extensions = args
        .extensions
        .as_deref()
        .unwrap_or_else(|| config.preferences.file_extensions());
    debug!("Registering {} for {}", bundle_id, extensions);

    let service = DefaultApplicationService::new();
    let spinner = (!args.json).then(|| {
        output::spinner(&format!("Setting {} as default application...", app.name))
    });
    let result = service.register(bundle_id, extensions).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let report = result.to_report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.success {
        output::success(&format!("{} for {}", report.message, app.name));
        if let Some(details) = &report.details {
            output::details(details);
        }
    } else {
        output::error(&report.message);
        if let Some(details) = &report.details {
            output::details(details);
        }
    }

    if !report.success {
        if result.failure_kind() == Some(FailureKind::Environment) {
            warn!("Association tool not found; run `appswitch doctor` for details");
        }
        std::process::exit(1);
    }
    Ok(())
}
