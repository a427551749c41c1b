//! Preference types for config.yaml

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of app slots available in the preferences
pub const SLOT_COUNT: usize = 5;

/// One app slot as stored in the preferences file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSlot {
    /// Filesystem path of the application
    #[serde(default)]
    pub path: String,

    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional bundle identifier
    #[serde(
        default,
        alias = "bundleId",
        skip_serializing_if = "Option::is_none"
    )]
    pub bundle_id: Option<String>,
}

/// Root config.yaml preferences
///
/// ```yaml
/// app1:
///   path: /Applications/Zed.app
///   name: Zed
///   bundle_id: dev.zed.Zed
/// file_extensions: ".rs,.toml,.md"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app1: Option<AppSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app2: Option<AppSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app3: Option<AppSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app4: Option<AppSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app5: Option<AppSlot>,

    /// Comma-separated extension list for "set default"
    #[serde(alias = "fileExtensions", skip_serializing_if = "Option::is_none")]
    pub file_extensions: Option<String>,
}

impl Preferences {
    /// All five slots in order
    pub fn slots(&self) -> [Option<&AppSlot>; SLOT_COUNT] {
        [
            self.app1.as_ref(),
            self.app2.as_ref(),
            self.app3.as_ref(),
            self.app4.as_ref(),
            self.app5.as_ref(),
        ]
    }

    /// Mutable access to a 1-based slot
    pub fn slot_mut(&mut self, slot: usize) -> Result<&mut Option<AppSlot>> {
        match slot {
            1 => Ok(&mut self.app1),
            2 => Ok(&mut self.app2),
            3 => Ok(&mut self.app3),
            4 => Ok(&mut self.app4),
            5 => Ok(&mut self.app5),
            _ => Err(Error::invalid_slot(slot)),
        }
    }

    /// The configured extension list, falling back to the built-in default
    pub fn file_extensions(&self) -> &str {
        match self.file_extensions.as_deref() {
            Some(list) if !list.trim().is_empty() => list,
            _ => crate::extensions::DEFAULT_FILE_EXTENSIONS,
        }
    }
}
