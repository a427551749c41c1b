//! Preferences file loading and saving

mod loader;

pub use loader::{generate_default_config, AppSwitchConfig, APPSWITCH_CONFIG_ENV};
