// Trainer inventory & cooldown store
//
// Owns the in-memory trainer mapping and the trainers.json file backing it.
// The whole file is rewritten after every successful catch; there is no
// protection against concurrent external writers.

use crate::models::{TrainerData, TrainerRecord};
use crate::storage::json_ops::{read_json_file, write_json_file, StorageError};
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct TrainerStore {
    path: PathBuf,
    backup_path: PathBuf,
    data: TrainerData,
}

impl TrainerStore {
    /// Loads trainer state from `path`. A missing file is initialized to an
    /// empty mapping and persisted immediately, so a canonical file always
    /// exists afterwards. Any other read or parse failure is logged and
    /// degrades to an empty in-memory store; it is never fatal.
    pub fn open(path: PathBuf, backup_path: PathBuf) -> Self {
        let data = Self::load(&path);
        Self {
            path,
            backup_path,
            data,
        }
    }

    fn load(path: &Path) -> TrainerData {
        match read_json_file::<TrainerData>(path) {
            Ok(data) => data,
            Err(e) if e.is_not_found() => {
                let empty = TrainerData::new();
                if let Err(e) = write_json_file(path, &empty) {
                    error!("Failed to initialize trainer file: {}", e);
                }
                empty
            }
            Err(e) => {
                error!("Failed to load trainer file, starting empty: {}", e);
                TrainerData::new()
            }
        }
    }

    /// Re-reads the backing file, discarding the in-memory state.
    pub fn reload(&mut self) {
        self.data = Self::load(&self.path);
        info!("Reloaded trainer data ({} trainers)", self.data.len());
    }

    pub fn save(&self) -> Result<(), StorageError> {
        write_json_file(&self.path, &self.data)
    }

    pub fn save_backup(&self) -> Result<(), StorageError> {
        write_json_file(&self.backup_path, &self.data)
    }

    pub fn record(&self, user_id: &str) -> Option<&TrainerRecord> {
        self.data.get(user_id)
    }

    /// Returns the trainer record for `user_id`, inserting a fresh zero-state
    /// record (empty inventory, never caught) for a previously-unseen user.
    pub fn get_or_create(&mut self, user_id: &str) -> &mut TrainerRecord {
        self.data.entry(user_id.to_string()).or_default()
    }

    /// Increments the caught count for `name` and stamps the cooldown timer.
    /// The caller is responsible for persisting with [`TrainerStore::save`].
    pub fn record_catch(&mut self, user_id: &str, name: &str, now: f64) {
        let record = self.get_or_create(user_id);
        record.pinventory.add(name);
        record.timer = Some(now);
    }

    pub fn trainer_count(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_paths(dir: &TempDir) -> (PathBuf, PathBuf) {
        (
            dir.path().join("trainers.json"),
            dir.path().join("trainers_backup.json"),
        )
    }

    #[test]
    fn test_open_missing_file_initializes_empty_and_persists() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);

        let store = TrainerStore::open(path.clone(), backup);
        assert_eq!(store.trainer_count(), 0);
        // The canonical file must exist after open, even with no trainers.
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
    }

    #[test]
    fn test_open_corrupt_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);
        fs::write(&path, "{not json").unwrap();

        let store = TrainerStore::open(path, backup);
        assert_eq!(store.trainer_count(), 0);
    }

    #[test]
    fn test_get_or_create_yields_zero_state_record() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);

        let mut store = TrainerStore::open(path, backup);
        let record = store.get_or_create("1234");
        assert!(record.pinventory.is_empty());
        assert_eq!(record.timer, None);
    }

    #[test]
    fn test_fresh_record_round_trips_through_save_and_load() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);

        let mut store = TrainerStore::open(path.clone(), backup.clone());
        store.get_or_create("1234");
        store.save().unwrap();

        let reloaded = TrainerStore::open(path, backup);
        let record = reloaded.record("1234").unwrap();
        assert!(record.pinventory.is_empty());
        assert_eq!(record.timer, None);
    }

    #[test]
    fn test_record_catch_is_monotonic() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);

        let mut store = TrainerStore::open(path, backup);
        store.record_catch("1234", "pikachu", 100.0);
        store.record_catch("1234", "pikachu", 200.0);
        store.record_catch("1234", "eevee", 300.0);

        let record = store.record("1234").unwrap();
        assert_eq!(record.pinventory.count("pikachu"), Some(2));
        assert_eq!(record.pinventory.count("eevee"), Some(1));
        assert_eq!(record.timer, Some(300.0));
    }

    #[test]
    fn test_catch_state_survives_reload() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);

        let mut store = TrainerStore::open(path.clone(), backup.clone());
        store.record_catch("42", "tapu_koko", 1500.5);
        store.save().unwrap();

        let reloaded = TrainerStore::open(path, backup);
        let record = reloaded.record("42").unwrap();
        assert_eq!(record.pinventory.count("tapu_koko"), Some(1));
        assert_eq!(record.timer, Some(1500.5));
    }

    #[test]
    fn test_save_backup_writes_separate_file() {
        let dir = TempDir::new().unwrap();
        let (path, backup) = store_paths(&dir);

        let mut store = TrainerStore::open(path, backup.clone());
        store.record_catch("7", "mew", 10.0);
        store.save_backup().unwrap();

        assert!(backup.exists());
        let copied: TrainerData =
            serde_json::from_str(&fs::read_to_string(&backup).unwrap()).unwrap();
        assert_eq!(copied.get("7").unwrap().pinventory.count("mew"), Some(1));
    }
}
