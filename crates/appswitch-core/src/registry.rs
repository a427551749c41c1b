//! Configured-app registry
//!
//! Reshapes the five optional preference slots into a uniform list and
//! orders it for display: the most recently used app first, the rest
//! alphabetically.

use std::cmp::Ordering;

use tracing::debug;

use crate::types::{AppSlot, ConfiguredApp, Preferences};

/// Read the preference slots into a list of configured apps
///
/// Slots without a path are skipped. A missing or blank name becomes
/// `"App N"` where N is the 1-based slot number. Blank bundle ids are
/// treated as absent.
pub fn list_configured_apps(preferences: &Preferences) -> Vec<ConfiguredApp> {
    preferences
        .slots()
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.and_then(|slot| from_slot(index, slot)))
        .collect()
}

fn from_slot(index: usize, slot: &AppSlot) -> Option<ConfiguredApp> {
    let path = slot.path.trim();
    if path.is_empty() {
        debug!("Skipping app slot {}: no path configured", index + 1);
        return None;
    }

    let name = slot
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("App {}", index + 1));

    let bundle_id = slot
        .bundle_id
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string);

    Some(ConfiguredApp {
        name,
        path: path.to_string(),
        bundle_id,
    })
}

/// Order apps for display
///
/// The app named `last_used` comes first; everything else follows in
/// case-sensitive lexical order of name. The sort is stable.
pub fn order_for_display(apps: &[ConfiguredApp], last_used: Option<&str>) -> Vec<ConfiguredApp> {
    let mut ordered = apps.to_vec();
    ordered.sort_by(|a, b| {
        let a_last = Some(a.name.as_str()) == last_used;
        let b_last = Some(b.name.as_str()) == last_used;
        match (a_last, b_last) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }
    });
    ordered
}

/// Find an app by its exact display name
pub fn find_by_name<'a>(apps: &'a [ConfiguredApp], name: &str) -> Option<&'a ConfiguredApp> {
    apps.iter().find(|app| app.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str) -> ConfiguredApp {
        ConfiguredApp {
            name: name.to_string(),
            path: format!("/Applications/{}.app", name),
            bundle_id: None,
        }
    }

    fn slot(path: &str, name: Option<&str>, bundle_id: Option<&str>) -> Option<AppSlot> {
        Some(AppSlot {
            path: path.to_string(),
            name: name.map(str::to_string),
            bundle_id: bundle_id.map(str::to_string),
        })
    }

    fn names(apps: &[ConfiguredApp]) -> Vec<&str> {
        apps.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_list_skips_empty_slots_and_defaults_names() {
        let prefs = Preferences {
            app1: slot("/Applications/Zed.app", Some("Zed"), Some("dev.zed.Zed")),
            app2: None,
            app3: slot("", Some("Ghost"), None),
            app4: slot("/Applications/Xcode.app", None, Some("  ")),
            app5: slot("/Applications/Nova.app", Some("   "), None),
            file_extensions: None,
        };

        let apps = list_configured_apps(&prefs);
        assert_eq!(names(&apps), vec!["Zed", "App 4", "App 5"]);
        assert_eq!(apps[0].bundle_id(), Some("dev.zed.Zed"));
        assert_eq!(apps[1].bundle_id(), None);
        assert_eq!(apps[1].path, "/Applications/Xcode.app");
    }

    #[test]
    fn test_list_empty_preferences() {
        assert!(list_configured_apps(&Preferences::default()).is_empty());
    }

    #[test]
    fn test_order_last_used_first_then_alphabetical() {
        let apps = vec![app("Zed"), app("Atom"), app("VSCode")];
        let ordered = order_for_display(&apps, Some("Atom"));
        assert_eq!(names(&ordered), vec!["Atom", "VSCode", "Zed"]);

        let ordered = order_for_display(&apps, Some("Zed"));
        assert_eq!(names(&ordered), vec!["Zed", "Atom", "VSCode"]);
    }

    #[test]
    fn test_order_without_last_used() {
        let apps = vec![app("Zed"), app("Atom"), app("VSCode")];
        assert_eq!(
            names(&order_for_display(&apps, None)),
            vec!["Atom", "VSCode", "Zed"]
        );
        assert_eq!(
            names(&order_for_display(&apps, Some("Sublime"))),
            vec!["Atom", "VSCode", "Zed"]
        );
    }

    #[test]
    fn test_order_is_case_sensitive() {
        let apps = vec![app("atom"), app("Zed"), app("Atom")];
        assert_eq!(
            names(&order_for_display(&apps, None)),
            vec!["Atom", "Zed", "atom"]
        );
    }

    #[test]
    fn test_order_does_not_mutate_input() {
        let apps = vec![app("Zed"), app("Atom")];
        let _ = order_for_display(&apps, Some("Atom"));
        assert_eq!(names(&apps), vec!["Zed", "Atom"]);
    }

    #[test]
    fn test_find_by_name_exact() {
        let apps = vec![app("Zed"), app("Atom")];
        assert_eq!(find_by_name(&apps, "Atom").map(|a| a.name.as_str()), Some("Atom"));
        assert!(find_by_name(&apps, "atom").is_none());
    }
}
