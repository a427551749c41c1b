//! # appswitch-core
//!
//! Core library for appswitch providing:
//! - Preferences file parsing (`~/.appswitch/config.yaml`)
//! - The configured-app registry (five fixed slots, display ordering)
//! - File extension list parsing and validation
//! - The last-used key-value store and the OS "open" primitive

pub mod bundle;
pub mod config;
pub mod error;
pub mod extensions;
pub mod launcher;
pub mod registry;
pub mod state;
pub mod types;
pub mod utils;

pub use config::AppSwitchConfig;
pub use error::{Error, Result};
pub use extensions::{ExtensionToken, ValidatedExtensions, DEFAULT_FILE_EXTENSIONS};
pub use launcher::{AppLauncher, SystemLauncher};
pub use registry::{find_by_name, list_configured_apps, order_for_display};
pub use state::{FileStateStore, KeyValueStore, MemoryStateStore, LAST_SELECTED_APP_KEY};
pub use types::{AppSlot, ConfiguredApp, Preferences};
pub use utils::get_home_dir;
