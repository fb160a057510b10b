use crate::types::DnsProfile;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable storage for the ordered profile list: one JSON file, rewritten
/// wholesale on every save. Owned by the manager; no concurrent writer is
/// assumed.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `profiles.json` under the platform config directory.
    pub fn at_default_location() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .or_else(dirs::data_local_dir)
            .ok_or(StoreError::ConfigDirNotFound)?;

        Ok(Self::new(config_dir.join("dns-profiles").join("profiles.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted profile list. A missing, unreadable, or malformed
    /// file yields an empty list; load failures are never surfaced.
    pub fn load(&self) -> Vec<DnsProfile> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        let stripped = json_comments::StripComments::new(content.as_bytes());
        serde_json::from_reader(stripped).unwrap_or_default()
    }

    /// Serializes the full list and overwrites the backing file. Unlike load,
    /// a failed save loses user intent and must propagate.
    pub fn save(&self, profiles: &[DnsProfile]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profiles)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profiles() -> Vec<DnsProfile> {
        vec![
            DnsProfile::new("Cloudflare", "1.1.1.1", "1.0.0.1"),
            DnsProfile::new("Google", "8.8.8.8", ""),
        ]
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles.json"));

        let profiles = sample_profiles();
        store.save(&profiles).unwrap();
        assert_eq!(store.load(), profiles);
    }

    #[test]
    fn test_round_trip_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profiles.json"));

        store.save(&[]).unwrap();
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("does-not-exist.json"));
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(&path, "{ not valid json").unwrap();

        let store = ProfileStore::new(path);
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_load_tolerates_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(
            &path,
            r#"[
                // operator note
                { "name": "Quad9", "preferred": "9.9.9.9", "alternate": "" }
            ]"#,
        )
        .unwrap();

        let store = ProfileStore::new(path);
        assert_eq!(store.load(), vec![DnsProfile::new("Quad9", "9.9.9.9", "")]);
    }

    #[test]
    fn test_missing_alternate_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        fs::write(&path, r#"[{ "name": "Quad9", "preferred": "9.9.9.9" }]"#).unwrap();

        let store = ProfileStore::new(path);
        assert_eq!(store.load(), vec![DnsProfile::new("Quad9", "9.9.9.9", "")]);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nested").join("profiles.json"));

        store.save(&sample_profiles()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_default_location() {
        let store = ProfileStore::at_default_location().unwrap();
        let path = store.path().to_string_lossy().into_owned();
        assert!(path.contains("dns-profiles"));
        assert!(path.ends_with("profiles.json"));
    }
}
