// Gateway event handling and shared bot state

use crate::assets::AssetIndex;
use crate::commands;
use crate::game::selection::SelectionStrategy;
use crate::models::Settings;
use crate::storage::TrainerStore;
use parking_lot::{Mutex, RwLock};
use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// All shared state, owned for the process lifetime and passed into every
/// command handler. The trainer store and asset index sit behind locks that
/// are only ever held for the synchronous load-mutate-save part of a command,
/// never across an await.
pub struct AppState {
    pub settings: Settings,
    pub trainers: Mutex<TrainerStore>,
    pub assets: RwLock<AssetIndex>,
    pub selector: Box<dyn SelectionStrategy>,
}

pub struct Handler {
    pub state: Arc<AppState>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Connected as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(rest) = msg.content.strip_prefix(&self.state.settings.command_prefix) else {
            return;
        };
        let mut args = rest.split_whitespace();
        let command = match args.next() {
            Some(c) => c,
            None => return,
        };

        let result = match command {
            "pokemon" => commands::pokemon::catch(&ctx, &msg, &self.state).await,
            "inventory" => {
                let page = args.next().and_then(|p| p.parse().ok()).unwrap_or(1);
                commands::inventory::display(&ctx, &msg, &self.state, page).await
            }
            "reload" => commands::pokemon::reload(&ctx, &msg, &self.state).await,
            _ => return,
        };

        // Command failures degrade to a generic notice; internals stay in the
        // log only.
        if let Err(e) = result {
            error!("Command '{}' failed for user {}: {}", command, msg.author.id, e);
            if let Err(e) = msg
                .channel_id
                .say(&ctx.http, "An error has occurred. See the log for details.")
                .await
            {
                error!("Failed to deliver error notice: {}", e);
            }
        }
    }
}
