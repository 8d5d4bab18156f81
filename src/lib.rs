pub mod assets;
pub mod bot;
pub mod commands;
pub mod game;
pub mod logging;
pub mod models;
pub mod storage;
pub mod utils;

use assets::AssetIndex;
use bot::{AppState, Handler};
use game::selection::UniformRandom;
use models::Settings;
use parking_lot::{Mutex, RwLock};
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;
use storage::TrainerStore;
use thiserror::Error;
use tracing::{info, warn};
use utils::{
    get_settings_json_path, get_trainers_backup_json_path, get_trainers_json_path,
    initialize_data_directories,
};

#[derive(Debug, Error)]
pub enum BotError {
    #[error("storage error: {0}")]
    Storage(#[from] storage::StorageError),
    #[error("discord error: {0}")]
    Discord(#[from] serenity::Error),
    #[error("DISCORD_TOKEN environment variable is not set")]
    MissingToken,
    #[error("startup failed: {0}")]
    Startup(String),
    #[error("no pokemon sprites are loaded")]
    EmptyAssetIndex,
    #[error("selected pokemon '{0}' has no sprite in the asset index")]
    MissingSprite(String),
}

pub async fn run() -> Result<(), BotError> {
    logging::init();
    initialize_data_directories().map_err(BotError::Startup)?;

    let settings = Settings::load_from(&get_settings_json_path())?;
    let token = std::env::var("DISCORD_TOKEN").map_err(|_| BotError::MissingToken)?;

    let assets = AssetIndex::build(&settings.assets_path())?;
    if assets.is_empty() {
        warn!(
            "No sprites found in {:?}; catches will fail until assets are added",
            settings.assets_path()
        );
    } else {
        info!("Loaded {} pokemon sprites", assets.len());
    }

    let trainers = TrainerStore::open(get_trainers_json_path(), get_trainers_backup_json_path());
    info!("Loaded {} trainers", trainers.trainer_count());
    // One backup copy per process start; a failed backup is not fatal.
    if let Err(e) = trainers.save_backup() {
        warn!("Failed to write trainer backup: {}", e);
    }

    let state = Arc::new(AppState {
        settings,
        trainers: Mutex::new(trainers),
        assets: RwLock::new(assets),
        selector: Box::new(UniformRandom),
    });

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { state })
        .await?;

    client.start().await?;
    Ok(())
}
