//! Scoop store location and installed-package queries.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{BucketeerError, Result};

use super::record::{AppManifest, InstallInfo, InstalledPackage};

/// Handle to a Scoop installation directory.
#[derive(Debug, Clone)]
pub struct ScoopStore {
    root: PathBuf,
}

impl ScoopStore {
    /// Locate the Scoop root.
    ///
    /// Resolution order: explicit path, `SCOOP` environment variable,
    /// `~/scoop`. Fails with [`BucketeerError::StoreUnavailable`] when the
    /// resolved root has no `apps` directory.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        let root = match explicit {
            Some(path) => path,
            None => match std::env::var_os("SCOOP") {
                Some(var) => PathBuf::from(var),
                None => dirs::home_dir()
                    .map(|home| home.join("scoop"))
                    .ok_or_else(|| BucketeerError::StoreUnavailable {
                        path: PathBuf::from("~/scoop"),
                        message: "cannot determine home directory".to_string(),
                    })?,
            },
        };

        if !root.join("apps").is_dir() {
            return Err(BucketeerError::StoreUnavailable {
                path: root,
                message: "no apps directory".to_string(),
            });
        }

        Ok(Self { root })
    }

    /// Open a store at a known root without checking the layout.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate packages installed from the given bucket.
    ///
    /// Apps with missing or unparseable metadata are skipped (logged at
    /// debug level); only the `apps` directory itself being unreadable is
    /// an error. Result is ordered most-recently-updated first. Callers
    /// needing correctness should rely on membership only, not order.
    pub fn query_installed(&self, bucket: &str) -> Result<Vec<InstalledPackage>> {
        let apps_dir = self.root.join("apps");
        let entries = fs::read_dir(&apps_dir).map_err(|e| BucketeerError::StoreUnavailable {
            path: apps_dir.clone(),
            message: e.to_string(),
        })?;

        let mut packages = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| BucketeerError::StoreUnavailable {
                path: apps_dir.clone(),
                message: e.to_string(),
            })?;
            let name = entry.file_name().to_string_lossy().to_string();
            let current = entry.path().join("current");

            match read_app(&current, &name, bucket) {
                Ok(Some(pkg)) => packages.push(pkg),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!("skipping app '{}': {}", name, e);
                }
            }
        }

        packages.sort_by(|a, b| b.updated.cmp(&a.updated).then_with(|| a.name.cmp(&b.name)));

        tracing::debug!(
            "found {} installed package(s) in bucket '{}'",
            packages.len(),
            bucket
        );

        Ok(packages)
    }
}

/// Read one app's `current` directory, returning `None` when the app does
/// not belong to the requested bucket.
fn read_app(current: &Path, name: &str, bucket: &str) -> Result<Option<InstalledPackage>> {
    let install_path = current.join("install.json");
    let install_raw = fs::read_to_string(&install_path)?;
    let install: InstallInfo =
        serde_json::from_str(&install_raw).map_err(|e| anyhow::anyhow!("install.json: {}", e))?;

    if install.bucket.as_deref() != Some(bucket) {
        return Ok(None);
    }

    let manifest_raw = fs::read_to_string(current.join("manifest.json"))?;
    let manifest: AppManifest =
        serde_json::from_str(&manifest_raw).map_err(|e| anyhow::anyhow!("manifest.json: {}", e))?;

    let updated: DateTime<Local> = fs::metadata(&install_path)?.modified()?.into();

    Ok(Some(InstalledPackage {
        name: name.to_string(),
        version: manifest.version.unwrap_or_else(|| "unknown".to_string()),
        updated,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_app(root: &Path, name: &str, version: &str, bucket: &str) {
        let current = root.join("apps").join(name).join("current");
        fs::create_dir_all(&current).unwrap();
        fs::write(
            current.join("install.json"),
            format!(r#"{{"bucket": "{}", "architecture": "64bit"}}"#, bucket),
        )
        .unwrap();
        fs::write(
            current.join("manifest.json"),
            format!(r#"{{"version": "{}"}}"#, version),
        )
        .unwrap();
    }

    #[test]
    fn locate_explicit_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("apps")).unwrap();

        let store = ScoopStore::locate(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(store.root(), temp.path());
    }

    #[test]
    fn locate_missing_apps_dir_fails() {
        let temp = TempDir::new().unwrap();

        let result = ScoopStore::locate(Some(temp.path().to_path_buf()));
        assert!(matches!(
            result,
            Err(BucketeerError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn query_filters_by_bucket() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "1.0", "gauto");
        write_app(temp.path(), "git", "2.44", "main");

        let store = ScoopStore::at(temp.path());
        let packages = store.query_installed("gauto").unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "ga-foo");
        assert_eq!(packages[0].version, "1.0");
    }

    #[test]
    fn query_empty_store() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("apps")).unwrap();

        let store = ScoopStore::at(temp.path());
        let packages = store.query_installed("gauto").unwrap();

        assert!(packages.is_empty());
    }

    #[test]
    fn query_missing_apps_dir_is_store_unavailable() {
        let temp = TempDir::new().unwrap();

        let store = ScoopStore::at(temp.path());
        let result = store.query_installed("gauto");

        assert!(matches!(
            result,
            Err(BucketeerError::StoreUnavailable { .. })
        ));
    }

    #[test]
    fn query_skips_apps_without_metadata() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "1.0", "gauto");
        // App directory with no current/install.json (e.g. mid-install)
        fs::create_dir_all(temp.path().join("apps").join("ga-broken")).unwrap();

        let store = ScoopStore::at(temp.path());
        let packages = store.query_installed("gauto").unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "ga-foo");
    }

    #[test]
    fn query_skips_invalid_install_json() {
        let temp = TempDir::new().unwrap();
        write_app(temp.path(), "ga-foo", "1.0", "gauto");
        let current = temp.path().join("apps").join("ga-bad").join("current");
        fs::create_dir_all(&current).unwrap();
        fs::write(current.join("install.json"), "not json").unwrap();

        let store = ScoopStore::at(temp.path());
        let packages = store.query_installed("gauto").unwrap();

        assert_eq!(packages.len(), 1);
    }

    #[test]
    fn query_defaults_missing_version() {
        let temp = TempDir::new().unwrap();
        let current = temp.path().join("apps").join("ga-foo").join("current");
        fs::create_dir_all(&current).unwrap();
        fs::write(current.join("install.json"), r#"{"bucket": "gauto"}"#).unwrap();
        fs::write(current.join("manifest.json"), "{}").unwrap();

        let store = ScoopStore::at(temp.path());
        let packages = store.query_installed("gauto").unwrap();

        assert_eq!(packages[0].version, "unknown");
    }

    #[test]
    fn query_ignores_apps_installed_without_bucket() {
        let temp = TempDir::new().unwrap();
        let current = temp.path().join("apps").join("direct").join("current");
        fs::create_dir_all(&current).unwrap();
        fs::write(current.join("install.json"), r#"{"architecture": "64bit"}"#).unwrap();
        fs::write(current.join("manifest.json"), r#"{"version": "1.0"}"#).unwrap();

        let store = ScoopStore::at(temp.path());
        let packages = store.query_installed("gauto").unwrap();

        assert!(packages.is_empty());
    }
}
