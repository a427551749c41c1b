//! Shared path helpers

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Environment variable overriding the appswitch state directory
pub const APPSWITCH_HOME_ENV: &str = "APPSWITCH_HOME";

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// overrides made by wrappers and test harnesses are respected.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or(Error::NoHomeDir)
}

/// Get the appswitch directory (`$APPSWITCH_HOME` or `~/.appswitch`)
pub fn get_appswitch_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(APPSWITCH_HOME_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    Ok(get_home_dir()?.join(".appswitch"))
}

/// Get the state file path (`<appswitch dir>/state.yaml`)
pub fn get_state_path() -> Result<PathBuf> {
    Ok(get_appswitch_dir()?.join("state.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_appswitch_dir_honours_override() {
        let previous = std::env::var(APPSWITCH_HOME_ENV).ok();
        std::env::set_var(APPSWITCH_HOME_ENV, "/tmp/appswitch-test-home");

        let dir = get_appswitch_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/appswitch-test-home"));
        assert_eq!(
            get_state_path().unwrap(),
            PathBuf::from("/tmp/appswitch-test-home/state.yaml")
        );

        match previous {
            Some(v) => std::env::set_var(APPSWITCH_HOME_ENV, v),
            None => std::env::remove_var(APPSWITCH_HOME_ENV),
        }
    }

    #[test]
    #[serial]
    fn test_appswitch_dir_defaults_under_home() {
        let previous = std::env::var(APPSWITCH_HOME_ENV).ok();
        std::env::remove_var(APPSWITCH_HOME_ENV);

        if let Ok(home) = get_home_dir() {
            assert_eq!(get_appswitch_dir().unwrap(), home.join(".appswitch"));
        }

        if let Some(v) = previous {
            std::env::set_var(APPSWITCH_HOME_ENV, v);
        }
    }
}
