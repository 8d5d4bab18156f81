// Atomic JSON file operations

use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }

    fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let _lock = FILE_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| StorageError::io(path, e))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| StorageError::io(path, e))?;

    serde_json::from_str(&contents).map_err(|e| StorageError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes JSON atomically using write-to-temp-then-rename
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    let _lock = FILE_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let json_string = serde_json::to_string_pretty(data).map_err(|e| StorageError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    let temp_path = path.with_extension("tmp");

    let mut temp_file = File::create(&temp_path).map_err(|e| StorageError::io(&temp_path, e))?;

    temp_file
        .write_all(json_string.as_bytes())
        .map_err(|e| StorageError::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| StorageError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::io(path, e))?;

    Ok(())
}
