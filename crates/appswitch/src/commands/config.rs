//! Config commands

use anyhow::{bail, Context, Result};
use appswitch_core::bundle::read_bundle_identifier;
use appswitch_core::{extensions, AppSlot, AppSwitchConfig};
use camino::Utf8Path;
use std::path::Path;

use crate::cli::{
    ConfigClearAppArgs, ConfigCommands, ConfigInitArgs, ConfigSetAppArgs,
    ConfigSetExtensionsArgs, ConfigShowArgs,
};
use crate::output;

pub async fn run(cmd: ConfigCommands, config: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Init(args) => init(args, config),
        ConfigCommands::Show(args) => show(args, config),
        ConfigCommands::Path => path(config),
        ConfigCommands::SetApp(args) => set_app(args, config).await,
        ConfigCommands::ClearApp(args) => clear_app(args, config),
        ConfigCommands::SetExtensions(args) => set_extensions(args, config),
    }
}

fn init(args: ConfigInitArgs, config: Option<&Utf8Path>) -> Result<()> {
    let path = AppSwitchConfig::resolve_path(config)?;
    AppSwitchConfig::write_template(&path, args.force)?;
    output::success(&format!("Created {}", path));
    Ok(())
}

fn show(args: ConfigShowArgs, config: Option<&Utf8Path>) -> Result<()> {
    let config = AppSwitchConfig::load(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.preferences)?);
    } else {
        if !config.exists {
            output::info(&format!(
                "{} does not exist, showing defaults",
                config.config_path
            ));
        }
        print!("{}", serde_yaml_ng::to_string(&config.preferences)?);
        output::kv("effective file_extensions", config.preferences.file_extensions());
    }
    Ok(())
}

fn path(config: Option<&Utf8Path>) -> Result<()> {
    println!("{}", AppSwitchConfig::resolve_path(config)?);
    Ok(())
}

async fn set_app(args: ConfigSetAppArgs, config: Option<&Utf8Path>) -> Result<()> {
    let mut config = AppSwitchConfig::load(config)?;
    let slot = usize::from(args.slot);

    let bundle_id = match args.bundle_id {
        Some(id) => Some(id),
        None if args.no_detect => None,
        None => match read_bundle_identifier(Path::new(&args.path)).await {
            Ok(id) => {
                output::info(&format!("Detected bundle id {}", id));
                Some(id)
            }
            Err(e) => {
                output::warning(&format!("Could not detect bundle id: {}", e));
                None
            }
        },
    };

    let app = AppSlot {
        path: args.path,
        name: args.name,
        bundle_id,
    };
    config.set_slot(slot, app)?;
    config.save().context("Failed to save preferences")?;

    output::success(&format!("Slot {} updated in {}", slot, config.config_path));
    Ok(())
}

fn clear_app(args: ConfigClearAppArgs, config: Option<&Utf8Path>) -> Result<()> {
    let mut config = AppSwitchConfig::load(config)?;
    let slot = usize::from(args.slot);

    match config.clear_slot(slot)? {
        Some(previous) => {
            config.save().context("Failed to save preferences")?;
            let name = previous.name.unwrap_or(previous.path);
            output::success(&format!("Cleared slot {} ({})", slot, name));
        }
        None => output::info(&format!("Slot {} is already empty", slot)),
    }
    Ok(())
}

fn set_extensions(args: ConfigSetExtensionsArgs, config: Option<&Utf8Path>) -> Result<()> {
    let mut config = AppSwitchConfig::load(config)?;

    if args.reset {
        config.set_file_extensions(None);
        config.save().context("Failed to save preferences")?;
        output::success("Restored the built-in extension list");
        return Ok(());
    }

    let raw = args.extensions.unwrap_or_default();
    let checked = extensions::parse_and_validate(&raw);
    if checked.valid.is_empty() {
        bail!("No valid file extensions in '{}'", raw);
    }
    if !checked.invalid.is_empty() {
        output::warning(&format!(
            "These will be skipped by set-default: {}",
            checked.invalid.join(", ")
        ));
    }

    config.set_file_extensions(Some(raw));
    config.save().context("Failed to save preferences")?;
    output::success(&format!("Stored {} file extensions", checked.valid.len()));
    Ok(())
}
