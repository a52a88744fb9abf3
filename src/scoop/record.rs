//! Installed package records and Scoop's on-disk metadata schemas.

use chrono::{DateTime, Local};
use serde::Deserialize;

/// One package installed through Scoop.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledPackage {
    /// Raw app directory name, including any bucket naming prefix.
    pub name: String,

    /// Installed version from `manifest.json`.
    pub version: String,

    /// When the package was last installed or updated.
    pub updated: DateTime<Local>,
}

impl InstalledPackage {
    /// Format the update timestamp for display.
    pub fn updated_display(&self) -> String {
        self.updated.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Subset of Scoop's `install.json` that we read.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallInfo {
    /// Bucket the app was installed from. Absent for apps installed
    /// directly from a manifest URL.
    pub bucket: Option<String>,
}

/// Subset of Scoop's `manifest.json` that we read.
#[derive(Debug, Clone, Deserialize)]
pub struct AppManifest {
    pub version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn updated_display_formats_timestamp() {
        let pkg = InstalledPackage {
            name: "ga-foo".to_string(),
            version: "1.0".to_string(),
            updated: Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };
        assert_eq!(pkg.updated_display(), "2024-01-02 03:04:05");
    }

    #[test]
    fn install_info_parses_bucket() {
        let info: InstallInfo =
            serde_json::from_str(r#"{"bucket": "gauto", "architecture": "64bit"}"#).unwrap();
        assert_eq!(info.bucket.as_deref(), Some("gauto"));
    }

    #[test]
    fn install_info_without_bucket() {
        let info: InstallInfo = serde_json::from_str(r#"{"architecture": "64bit"}"#).unwrap();
        assert!(info.bucket.is_none());
    }

    #[test]
    fn app_manifest_parses_version() {
        let manifest: AppManifest =
            serde_json::from_str(r#"{"version": "2.1", "homepage": "https://example.com"}"#)
                .unwrap();
        assert_eq!(manifest.version.as_deref(), Some("2.1"));
    }
}
