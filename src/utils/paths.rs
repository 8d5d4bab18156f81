use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

static APP_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub fn get_app_data_dir() -> PathBuf {
    APP_DATA_DIR
        .get_or_init(|| {
            let base_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            base_dir.join("PokeBot")
        })
        .clone()
}

pub fn get_data_dir() -> PathBuf {
    get_app_data_dir().join("data")
}

/// Default sprite directory; `assets_dir` in settings.json overrides it.
pub fn get_assets_dir() -> PathBuf {
    get_app_data_dir().join("assets").join("nrml")
}

pub fn get_trainers_json_path() -> PathBuf {
    get_data_dir().join("trainers.json")
}

pub fn get_trainers_backup_json_path() -> PathBuf {
    get_data_dir().join("trainers_backup.json")
}

pub fn get_settings_json_path() -> PathBuf {
    get_data_dir().join("settings.json")
}

pub fn initialize_data_directories() -> Result<(), String> {
    let directories = [get_data_dir(), get_assets_dir()];

    for dir in &directories {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create directory {:?}: {}", dir, e))?;
        }
    }

    Ok(())
}
