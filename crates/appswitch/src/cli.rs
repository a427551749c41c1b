//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// appswitch - quick-switch between your preferred apps
#[derive(Parser, Debug)]
#[command(name = "appswitch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to config.yaml (default: $APPSWITCH_CONFIG or ~/.appswitch/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List configured apps, last used first
    List(ListArgs),

    /// Open a configured app and remember it as last used
    Open(OpenArgs),

    /// Re-open the last used app
    Last,

    /// Make a configured app the default for the configured file extensions
    SetDefault(SetDefaultArgs),

    /// Print the filesystem path of a configured app
    Path(PathArgs),

    /// Check that the file-association tool is installed
    Doctor(DoctorArgs),

    /// Preferences management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// List command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Open command
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// App name as shown by `appswitch list`
    pub name: String,
}

// Set-default command
#[derive(Args, Debug)]
pub struct SetDefaultArgs {
    /// App name as shown by `appswitch list`
    pub name: String,

    /// Comma-separated extensions (overrides file_extensions from config)
    #[arg(short, long)]
    pub extensions: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Path command
#[derive(Args, Debug)]
pub struct PathArgs {
    /// App name as shown by `appswitch list`
    pub name: String,
}

// Doctor command
#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// CI mode - exit non-zero when the tool is missing
    #[arg(long)]
    pub ci: bool,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a commented config.yaml template
    Init(ConfigInitArgs),

    /// Show the resolved preferences
    Show(ConfigShowArgs),

    /// Print the config file path in use
    Path,

    /// Put an app into one of the five slots
    SetApp(ConfigSetAppArgs),

    /// Empty one of the five slots
    ClearApp(ConfigClearAppArgs),

    /// Set the extensions used by `set-default`
    SetExtensions(ConfigSetExtensionsArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigSetAppArgs {
    /// Slot number (1-5)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    pub slot: u8,

    /// Path to the application (e.g. /Applications/Zed.app)
    pub path: String,

    /// Display name (default: "App <slot>")
    #[arg(short, long)]
    pub name: Option<String>,

    /// Bundle identifier (default: read from the app's Info.plist)
    #[arg(short, long)]
    pub bundle_id: Option<String>,

    /// Do not read the bundle identifier from the app
    #[arg(long, conflicts_with = "bundle_id")]
    pub no_detect: bool,
}

#[derive(Args, Debug)]
pub struct ConfigClearAppArgs {
    /// Slot number (1-5)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    pub slot: u8,
}

#[derive(Args, Debug)]
pub struct ConfigSetExtensionsArgs {
    /// Comma-separated extensions, e.g. ".rs,.toml,md"
    #[arg(required_unless_present = "reset")]
    pub extensions: Option<String>,

    /// Restore the built-in extension list
    #[arg(long, conflicts_with = "extensions")]
    pub reset: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
