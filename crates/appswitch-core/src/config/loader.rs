//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::types::{AppSlot, Preferences};
use crate::utils::get_appswitch_dir;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::{debug, info};

/// Environment variable pointing at an alternate config file
pub const APPSWITCH_CONFIG_ENV: &str = "APPSWITCH_CONFIG";

/// Default configuration file name inside the appswitch directory
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loaded appswitch preferences
#[derive(Debug, Clone)]
pub struct AppSwitchConfig {
    /// The parsed preferences
    pub preferences: Preferences,

    /// Path the preferences were (or will be) read from
    pub config_path: Utf8PathBuf,

    /// Whether the file existed when loaded
    pub exists: bool,
}

impl AppSwitchConfig {
    /// Load preferences from the given path, `$APPSWITCH_CONFIG`, or
    /// `~/.appswitch/config.yaml`, in that order
    ///
    /// A missing file is not an error: defaults are returned so that a
    /// fresh install can still list (zero) apps and run `doctor`.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path)?;

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", config_path);
                return Ok(Self {
                    preferences: Preferences::default(),
                    config_path,
                    exists: false,
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let preferences = Self::parse(&content)?;
        debug!("Loaded preferences from {}", config_path);

        Ok(Self {
            preferences,
            config_path,
            exists: true,
        })
    }

    /// Parse preferences YAML; a document holding only comments yields defaults
    pub fn parse(content: &str) -> Result<Preferences> {
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#') || line == "---");
        if blank {
            return Ok(Preferences::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Resolve which config file to use
    pub fn resolve_path(path: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
        if let Some(p) = path {
            return Ok(p.to_owned());
        }

        if let Ok(env_path) = std::env::var(APPSWITCH_CONFIG_ENV) {
            if !env_path.is_empty() {
                return Ok(Utf8PathBuf::from(env_path));
            }
        }

        let dir = Utf8PathBuf::try_from(get_appswitch_dir()?)
            .map_err(|_| Error::invalid_config("appswitch directory path is not valid UTF-8"))?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Write the preferences back to `config_path`
    pub fn save(&self) -> Result<()> {
        ensure_parent_dir(&self.config_path)?;
        let content = serde_yaml_ng::to_string(&self.preferences)?;
        fs::write(&self.config_path, content)?;
        info!("Saved preferences to {}", self.config_path);
        Ok(())
    }

    /// Write the commented starter template to `path`
    pub fn write_template(path: &Utf8Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(Error::invalid_config(format!(
                "{} already exists (use --force to overwrite)",
                path
            )));
        }
        ensure_parent_dir(path)?;
        fs::write(path, generate_default_config())?;
        info!("Wrote config template to {}", path);
        Ok(())
    }

    /// Replace the contents of a 1-based slot
    pub fn set_slot(&mut self, slot: usize, value: AppSlot) -> Result<()> {
        if value.path.trim().is_empty() {
            return Err(Error::invalid_config("app path must not be empty"));
        }
        *self.preferences.slot_mut(slot)? = Some(value);
        Ok(())
    }

    /// Empty a 1-based slot, returning what it held
    pub fn clear_slot(&mut self, slot: usize) -> Result<Option<AppSlot>> {
        Ok(self.preferences.slot_mut(slot)?.take())
    }

    /// Store the extension list; `None` restores the built-in default
    pub fn set_file_extensions(&mut self, extensions: Option<String>) {
        self.preferences.file_extensions = extensions;
    }
}

fn ensure_parent_dir(path: &Utf8Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Starter config.yaml with every slot documented
pub fn generate_default_config() -> String {
    format!(
        r#"# appswitch preferences
#
# Up to five apps can be configured. Each slot needs a path; name and
# bundle_id are optional (name defaults to "App N"). bundle_id is required
# for `appswitch set-default`.
#
# app1:
#   path: /Applications/Visual Studio Code.app
#   name: VSCode
#   bundle_id: com.microsoft.VSCode
# app2:
#   path: /Applications/Zed.app
#   name: Zed
#   bundle_id: dev.zed.Zed
# app3:
# app4:
# app5:

# Extensions registered by `appswitch set-default` (comma-separated).
# Leave unset to use the built-in list:
# file_extensions: "{}"
"#,
        crate::extensions::DEFAULT_FILE_EXTENSIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let prefs = AppSwitchConfig::parse(&generate_default_config()).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(AppSwitchConfig::parse("").unwrap(), Preferences::default());
        assert_eq!(
            AppSwitchConfig::parse("\n# only comments\n").unwrap(),
            Preferences::default()
        );
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        assert!(matches!(
            AppSwitchConfig::parse("app1: [not, a, slot]"),
            Err(Error::YamlParse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = utf8(&dir, "missing.yaml");

        let config = AppSwitchConfig::load(Some(&path)).unwrap();
        assert!(!config.exists);
        assert_eq!(config.config_path, path);
        assert_eq!(config.preferences, Preferences::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = utf8(&dir, "nested/config.yaml");

        let mut config = AppSwitchConfig::load(Some(&path)).unwrap();
        config
            .set_slot(
                2,
                AppSlot {
                    path: "/Applications/Zed.app".to_string(),
                    name: Some("Zed".to_string()),
                    bundle_id: Some("dev.zed.Zed".to_string()),
                },
            )
            .unwrap();
        config.set_file_extensions(Some(".rs,.toml".to_string()));
        config.save().unwrap();

        let reloaded = AppSwitchConfig::load(Some(&path)).unwrap();
        assert!(reloaded.exists);
        assert_eq!(reloaded.preferences, config.preferences);
        assert_eq!(reloaded.preferences.file_extensions(), ".rs,.toml");
    }

    #[test]
    fn test_set_slot_rejects_empty_path_and_bad_slot() {
        let mut config = AppSwitchConfig {
            preferences: Preferences::default(),
            config_path: Utf8PathBuf::from("unused.yaml"),
            exists: false,
        };
        assert!(config.set_slot(1, AppSlot::default()).is_err());

        let slot = AppSlot {
            path: "/Applications/Zed.app".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.set_slot(9, slot.clone()),
            Err(Error::InvalidSlot { slot: 9, .. })
        ));

        config.set_slot(3, slot.clone()).unwrap();
        assert_eq!(config.clear_slot(3).unwrap(), Some(slot));
        assert_eq!(config.clear_slot(3).unwrap(), None);
    }

    #[test]
    fn test_write_template_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = utf8(&dir, "config.yaml");

        AppSwitchConfig::write_template(&path, false).unwrap();
        assert!(AppSwitchConfig::write_template(&path, false).is_err());
        AppSwitchConfig::write_template(&path, true).unwrap();
    }

    #[test]
    #[serial]
    fn test_resolve_path_prefers_explicit_then_env() {
        let previous = std::env::var(APPSWITCH_CONFIG_ENV).ok();
        std::env::set_var(APPSWITCH_CONFIG_ENV, "/tmp/from-env.yaml");

        let explicit = Utf8PathBuf::from("/tmp/explicit.yaml");
        assert_eq!(
            AppSwitchConfig::resolve_path(Some(&explicit)).unwrap(),
            explicit
        );
        assert_eq!(
            AppSwitchConfig::resolve_path(None).unwrap(),
            Utf8PathBuf::from("/tmp/from-env.yaml")
        );

        match previous {
            Some(v) => std::env::set_var(APPSWITCH_CONFIG_ENV, v),
            None => std::env::remove_var(APPSWITCH_CONFIG_ENV),
        }
    }
}
