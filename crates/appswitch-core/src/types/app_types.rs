//! Configured application type

use serde::{Deserialize, Serialize};

/// An application the user has placed in one of the preference slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredApp {
    /// Display name (defaults to "App N" when the slot has none)
    pub name: String,

    /// Filesystem path of the application (e.g. /Applications/Zed.app)
    pub path: String,

    /// Bundle identifier used for file associations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
}

impl ConfiguredApp {
    /// Bundle identifier, if the slot carried a non-empty one
    pub fn bundle_id(&self) -> Option<&str> {
        self.bundle_id.as_deref()
    }
}
