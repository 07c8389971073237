//! Celestial-body catalogue backed by a JSON file.
//!
//! Loaded once at startup and read-only afterwards. A missing file is
//! recovered by seeding the built-in ten-record set and persisting it back;
//! a corrupt file is a recoverable error the caller may degrade on.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const SEED_DATA: &str = include_str!("seed.json");

/// Reference data for a single celestial body. The display name is the map
/// key, not a record field.
///
/// Everything except the classification is optional; a record whose mass or
/// radius is missing or unparseable is still displayable, just not usable by
/// the density calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialRecord {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luminosity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalogue file not found")]
    Missing,
    #[error("catalogue file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("catalogue i/o failure: {0}")]
    IoFailure(#[from] std::io::Error),
}

/// The built-in ten-record data set (Sun, eight planets, Sirius). Values are
/// literal constants embedded at compile time.
pub fn seed_defaults() -> HashMap<String, CelestialRecord> {
    serde_json::from_str(SEED_DATA).expect("built-in catalogue data is valid JSON")
}

/// In-memory catalogue plus the path of its backing file.
#[derive(Debug, Clone)]
pub struct CatalogueStore {
    path: PathBuf,
    data: HashMap<String, CelestialRecord>,
}

impl CatalogueStore {
    /// Loads the catalogue from `path`. A missing file seeds the built-in
    /// data set and persists it (a failed seed-save is logged and the store
    /// stays usable in memory). Malformed content surfaces as
    /// [`StoreError::Corrupt`]; the caller decides whether to degrade.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match read_file(&path).await {
            Ok(data) => {
                info!(path = %path.display(), objects = data.len(), "catalogue loaded");
                Ok(Self { path, data })
            }
            Err(StoreError::Missing) => {
                warn!(path = %path.display(), "catalogue file not found, seeding built-in data");
                let store = Self {
                    path,
                    data: seed_defaults(),
                };
                if let Err(e) = store.save().await {
                    warn!(error = %e, "failed to persist seeded catalogue, continuing in memory");
                }
                Ok(store)
            }
            Err(e) => Err(e),
        }
    }

    /// A store with no records, for degraded startup after a corrupt load.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: HashMap::new(),
        }
    }

    /// A store over an explicit data set, bypassing the filesystem.
    pub fn from_data(path: impl Into<PathBuf>, data: HashMap<String, CelestialRecord>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Serializes the catalogue to its backing file through a temp file and
    /// rename. Failures are for the caller to log; the in-memory data stays
    /// usable either way.
    pub async fn save(&self) -> Result<(), StoreError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        tokio::fs::create_dir_all(&dir).await?;

        let tmp_path = dir.join(format!(".celestial_data.tmp-{}", uuid::Uuid::new_v4()));
        let raw = serde_json::to_string_pretty(&self.data)?;
        tokio::fs::write(&tmp_path, raw).await?;

        // Best-effort atomic replace.
        let _ = tokio::fs::remove_file(&self.path).await;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        info!(path = %self.path.display(), objects = self.data.len(), "catalogue saved");
        Ok(())
    }

    /// Looks a body up by its display name, falling back to a
    /// case-insensitive match on the English name so tokens like
    /// `body:Earth` resolve too. Returns the canonical name with the record.
    pub fn lookup(&self, name: &str) -> Option<(&str, &CelestialRecord)> {
        if let Some((key, record)) = self.data.get_key_value(name) {
            return Some((key.as_str(), record));
        }
        self.data
            .iter()
            .find(|(_, record)| record.name_en.eq_ignore_ascii_case(name))
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn read_file(path: &Path) -> Result<HashMap<String, CelestialRecord>, StoreError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(StoreError::Missing),
        Err(e) => return Err(StoreError::IoFailure(e)),
    };
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_scientific;

    #[test]
    fn seed_has_the_ten_reference_bodies() {
        let seed = seed_defaults();
        assert_eq!(seed.len(), 10);
        for name in [
            "Солнце", "Меркурий", "Венера", "Земля", "Марс", "Юпитер", "Сатурн", "Уран",
            "Нептун", "Сириус",
        ] {
            assert!(seed.contains_key(name), "missing seed record: {}", name);
        }
    }

    #[test]
    fn seeded_planet_mass_and_radius_parse_positive() {
        let seed = seed_defaults();
        for name in [
            "Солнце", "Меркурий", "Венера", "Земля", "Марс", "Юпитер", "Сатурн", "Уран",
            "Нептун",
        ] {
            let record = &seed[name];
            let mass = parse_scientific(record.mass.as_deref().unwrap()).unwrap();
            let radius = parse_scientific(record.radius.as_deref().unwrap()).unwrap();
            assert!(mass.value > 0.0 && radius.value > 0.0, "bad values for {}", name);
        }
    }

    #[tokio::test]
    async fn missing_file_seeds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("celestial_data.json");

        let store = CatalogueStore::load(&path).await.unwrap();
        assert_eq!(store.len(), 10);
        assert!(path.exists(), "seeded catalogue was not persisted");

        // A second load reads the persisted file instead of reseeding.
        let reloaded = CatalogueStore::load(&path).await.unwrap();
        assert_eq!(reloaded.len(), 10);
        assert!(reloaded.lookup("Земля").is_some());
    }

    #[tokio::test]
    async fn corrupt_file_is_an_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("celestial_data.json");
        tokio::fs::write(&path, "{ this is not json").await.unwrap();

        match CatalogueStore::load(&path).await {
            Err(StoreError::Corrupt(_)) => {}
            other => panic!("expected Corrupt, got {:?}", other.map(|s| s.len())),
        }
    }

    #[tokio::test]
    async fn save_round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("celestial_data.json");

        let store = CatalogueStore::from_data(&path, seed_defaults());
        store.save().await.unwrap();

        let reloaded = CatalogueStore::load(&path).await.unwrap();
        let (_, earth) = reloaded.lookup("Земля").unwrap();
        assert_eq!(earth.mass.as_deref(), Some("5.9722×10²⁴ кг"));
        assert_eq!(earth.name_en, "Earth");
    }

    #[test]
    fn lookup_falls_back_to_english_names() {
        let store = CatalogueStore::from_data("unused.json", seed_defaults());
        let (canonical, _) = store.lookup("earth").unwrap();
        assert_eq!(canonical, "Земля");
        assert!(store.lookup("Pluto").is_none());
    }
}
