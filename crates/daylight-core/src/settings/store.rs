use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{LoadError, SaveError};
use crate::settings::SettingsRecord;

const INDENT: &[u8] = b"    ";

/// Result of reading the settings file. `record` is always usable; `error`
/// tells the caller that the defaults were substituted and why.
#[derive(Debug)]
pub struct LoadOutcome {
    pub record: SettingsRecord,
    pub error: Option<LoadError>,
}

/// Reads and writes the single JSON settings file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, reporting every failure.
    pub fn try_load(&self) -> Result<SettingsRecord, LoadError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(LoadError::Read { path: self.path.clone(), source });
            }
        };

        // Files edited on Windows may carry a byte order mark
        let json = json.trim_start_matches('\u{feff}');
        serde_json::from_str(json).map_err(|source| LoadError::Parse { path: self.path.clone(), source })
    }

    /// Load the settings, falling back to the defaults on any failure.
    pub fn load(&self) -> LoadOutcome {
        match self.try_load() {
            Ok(record) => {
                log::info!("Loaded settings from {}", self.path.display());
                LoadOutcome { record, error: None }
            }
            Err(e) => {
                if e.is_missing() {
                    log::info!("{}; using defaults", e);
                } else {
                    log::warn!("{}; using defaults", e);
                }
                LoadOutcome { record: SettingsRecord::default(), error: Some(e) }
            }
        }
    }

    /// Overwrite the settings file with `record`, creating its directory if needed.
    pub fn save(&self, record: &SettingsRecord) -> Result<(), SaveError> {
        log::debug!("Settings to save: {:?}", record);
        log::info!("Saving settings to {}", self.path.display());

        let bytes = to_pretty_json(record)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                log::info!("Creating directory: {}", dir.display());
                fs::create_dir_all(dir).map_err(|source| {
                    log::error!("Failed to create directory {}: {}", dir.display(), source);
                    SaveError::CreateDir { path: dir.to_path_buf(), source }
                })?;
            }
        }

        fs::write(&self.path, bytes).map_err(|source| {
            log::error!("Failed to write {}: {}", self.path.display(), source);
            SaveError::Write { path: self.path.clone(), source }
        })?;

        log::info!("Settings saved successfully.");
        Ok(())
    }
}

/// Serialize with sorted keys and four-space indentation.
pub fn to_pretty_json(record: &SettingsRecord) -> Result<Vec<u8>, serde_json::Error> {
    // serde_json::Map is ordered by key
    let value = serde_json::to_value(record)?;
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ExecutionMode, Transmission};
    use tempfile::tempdir;

    fn sample_record() -> SettingsRecord {
        SettingsRecord {
            execution_mode: ExecutionMode::Local,
            level_elevation: Some(3000.0),
            multilayer_wall: true,
            transmission_value: Transmission::new(42).unwrap(),
            write_results: false,
        }
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings_daylight.json"));

        let outcome = store.load();
        assert_eq!(outcome.record, SettingsRecord::default());
        assert!(matches!(outcome.error, Some(LoadError::Missing(_))));
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings_daylight.json");
        fs::write(&path, "{ not json").unwrap();

        let outcome = SettingsStore::new(&path).load();
        assert_eq!(outcome.record, SettingsRecord::default());
        assert!(matches!(outcome.error, Some(LoadError::Parse { .. })));
    }

    #[test]
    fn test_wrong_type_is_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings_daylight.json");
        fs::write(&path, r#"{"multilayer_wall": "yes"}"#).unwrap();

        let outcome = SettingsStore::new(&path).load();
        assert_eq!(outcome.record, SettingsRecord::default());
        assert!(matches!(outcome.error, Some(LoadError::Parse { .. })));
    }

    #[test]
    fn test_directory_in_place_of_file_is_read_error() {
        let dir = tempdir().unwrap();
        let outcome = SettingsStore::new(dir.path()).load();
        assert_eq!(outcome.record, SettingsRecord::default());
        assert!(matches!(outcome.error, Some(LoadError::Read { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings_daylight.json"));
        let record = sample_record();

        store.save(&record).unwrap();
        assert_eq!(store.try_load().unwrap(), record);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("settings_daylight.json");
        let store = SettingsStore::new(&path);

        store.save(&SettingsRecord::default()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings_daylight.json"));

        store.save(&sample_record()).unwrap();
        store.save(&SettingsRecord::default()).unwrap();
        assert_eq!(store.try_load().unwrap(), SettingsRecord::default());
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = SettingsStore::new(blocker.join("sub").join("settings_daylight.json"));

        let err = store.save(&SettingsRecord::default()).unwrap_err();
        assert!(matches!(err, SaveError::CreateDir { .. }));
    }

    #[test]
    fn test_pretty_json_layout() {
        let text = String::from_utf8(to_pretty_json(&sample_record()).unwrap()).unwrap();
        let expected = "{\n    \"execution_mode\": \"local\",\n    \"level_elevation\": 3000,\n    \"multilayer_wall\": true,\n    \"transmission_value\": 42,\n    \"write_results\": false\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings_daylight.json");
        fs::write(&path, "\u{feff}{\"transmission_value\": 55}").unwrap();

        let record = SettingsStore::new(&path).try_load().unwrap();
        assert_eq!(record.transmission_value.value(), 55);
    }
}
