// Sprite asset index
//
// Scans a single directory of per-pokemon image files and maps each name
// (the file stem) to its image paths. The index is read-only after
// construction; a reload builds a fresh index and swaps it in whole, so a
// failed rebuild leaves the previous index intact.

use crate::storage::StorageError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SPRITE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Default)]
pub struct AssetIndex {
    sprites: HashMap<String, Vec<PathBuf>>,
}

impl AssetIndex {
    pub fn build(dir: &Path) -> Result<Self, StorageError> {
        let entries = std::fs::read_dir(dir).map_err(|e| StorageError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut sprites: HashMap<String, Vec<PathBuf>> = HashMap::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_sprite = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| SPRITE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if !is_sprite {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            sprites.entry(name.to_string()).or_default().push(path);
        }

        Ok(Self { sprites })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }

    /// First image variant for `name`; the one attached to catch messages.
    pub fn first_sprite(&self, name: &str) -> Option<&Path> {
        self.sprites
            .get(name)
            .and_then(|paths| paths.first())
            .map(PathBuf::as_path)
    }

    pub fn variants(&self, name: &str) -> Option<&[PathBuf]> {
        self.sprites.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
