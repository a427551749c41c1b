//! Application bundle inspection
//!
//! Reads `CFBundleIdentifier` from an `.app` bundle's Info.plist so that
//! slots configured by path alone can still be used for file associations.

use serde_json::Value;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Read the bundle identifier of the `.app` at `app_path`
///
/// Converts `Contents/Info.plist` to JSON with `plutil`, which handles both
/// XML and binary plists.
pub async fn read_bundle_identifier(app_path: &Path) -> Result<String> {
    let app_display = app_path.display().to_string();
    let info_plist = app_path.join("Contents").join("Info.plist");
    if !info_plist.exists() {
        return Err(Error::bundle_info(&app_display, "no Contents/Info.plist found"));
    }

    let output = Command::new("plutil")
        .arg("-convert")
        .arg("json")
        .arg("-o")
        .arg("-")
        .arg(&info_plist)
        .output()
        .await
        .map_err(|e| Error::bundle_info(&app_display, format!("failed to run plutil: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::bundle_info(&app_display, stderr.trim().to_string()));
    }

    let plist: Value = serde_json::from_slice(&output.stdout)?;
    let bundle_id = bundle_identifier_from_plist(&plist)
        .ok_or_else(|| Error::bundle_info(&app_display, "CFBundleIdentifier missing"))?;

    debug!("Detected bundle id {} for {}", bundle_id, app_display);
    Ok(bundle_id)
}

/// Extract a non-empty `CFBundleIdentifier` from a plist rendered as JSON
pub fn bundle_identifier_from_plist(plist: &Value) -> Option<String> {
    plist
        .get("CFBundleIdentifier")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundle_identifier_from_plist() {
        let plist = json!({
            "CFBundleName": "Zed",
            "CFBundleIdentifier": "dev.zed.Zed"
        });
        assert_eq!(
            bundle_identifier_from_plist(&plist).as_deref(),
            Some("dev.zed.Zed")
        );
    }

    #[test]
    fn test_bundle_identifier_missing_or_blank() {
        assert!(bundle_identifier_from_plist(&json!({"CFBundleName": "X"})).is_none());
        assert!(bundle_identifier_from_plist(&json!({"CFBundleIdentifier": " "})).is_none());
        assert!(bundle_identifier_from_plist(&json!({"CFBundleIdentifier": 42})).is_none());
    }

    #[tokio::test]
    async fn test_read_bundle_identifier_without_plist() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_bundle_identifier(dir.path()).await.unwrap_err();
        assert!(matches!(err, Error::BundleInfo { .. }));
    }

    #[tokio::test]
    async fn test_read_bundle_identifier_from_info_plist() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = dir.path().join("Zed.app");
        std::fs::create_dir_all(app.join("Contents")).unwrap();
        std::fs::write(
            app.join("Contents").join("Info.plist"),
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>dev.zed.Zed</string>
</dict>
</plist>
"#,
        )
        .unwrap();

        let result = read_bundle_identifier(&app).await;
        if cfg!(target_os = "macos") {
            assert_eq!(result.unwrap(), "dev.zed.Zed");
        } else {
            // No plutil outside macOS
            let err = result.unwrap_err();
            assert!(matches!(err, Error::BundleInfo { .. }));
            assert!(err.to_string().contains("Zed.app"));
        }
    }
}
