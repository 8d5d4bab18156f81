// Pokemon catch and reload commands

use crate::assets::AssetIndex;
use crate::bot::AppState;
use crate::game::cooldown::{self, RemainingTime};
use crate::game::pokeball::POKEBALL_LIST;
use crate::game::rarity;
use crate::utils::pokemon_display_name;
use crate::BotError;
use rand::seq::SliceRandom;
use serenity::all::{Context, CreateAttachment, CreateEmbed, CreateMessage, Message};
use std::path::PathBuf;
use tracing::{error, info, warn};

enum CatchOutcome {
    Denied(RemainingTime),
    Caught {
        name: String,
        ball: &'static str,
        image: PathBuf,
    },
}

/// Services a catch request end to end: cooldown check, random draw, state
/// mutation + save, then message dispatch. All store and index access happens
/// before the first await so the locks are never held across one.
pub async fn catch(ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
    let now = chrono::Utc::now().timestamp_millis() as f64 / 1000.0;
    let user_id = msg.author.id.to_string();

    let outcome = {
        let mut store = state.trainers.lock();
        let timer = store.get_or_create(&user_id).timer;

        let decision = cooldown::evaluate(now, timer);
        if !decision.allowed {
            let remaining = decision.remaining.unwrap_or(RemainingTime {
                minutes: 0,
                seconds: 0,
            });
            CatchOutcome::Denied(remaining)
        } else {
            let (name, image) = {
                let assets = state.assets.read();
                let names: Vec<&str> = assets.names().collect();
                let Some(name) = state.selector.select(&names) else {
                    return Err(BotError::EmptyAssetIndex);
                };
                // The selection pool is the index itself, so a missing
                // sprite is an internal inconsistency; drop the catch
                // before anything is persisted.
                let Some(image) = assets.first_sprite(name) else {
                    return Err(BotError::MissingSprite(name.to_string()));
                };
                (name.to_string(), image.to_path_buf())
            };

            let ball = POKEBALL_LIST
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(POKEBALL_LIST[0]);

            store.record_catch(&user_id, &name, now);
            store.save()?;
            CatchOutcome::Caught { name, ball, image }
        }
    };

    match outcome {
        CatchOutcome::Denied(remaining) => {
            let reply = format!(
                ":no_entry_sign:**{}**, you need to wait another \
                 **{} minutes &** **{} seconds** before catching another pokemon.",
                msg.author.name, remaining.minutes, remaining.seconds
            );
            msg.channel_id.say(&ctx.http, reply).await?;
        }
        CatchOutcome::Caught { name, ball, image } => {
            info!("{} caught {}", msg.author.name, name);
            post_catch(ctx, msg, state, &name, ball, &image).await;
        }
    }

    Ok(())
}

/// Delivers the catch result. Both the rare-channel announcement and the
/// primary attachment send are best-effort: a failed announcement never
/// blocks the primary send, and a failed primary send is logged, not raised.
async fn post_catch(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    name: &str,
    ball: &'static str,
    image: &std::path::Path,
) {
    let content = format!(
        "**{}**, {} you've caught a **{}**!",
        msg.author.name,
        ball,
        pokemon_display_name(name)
    );

    if rarity::is_rare(name) {
        if let Err(e) = announce_rare(ctx, msg, state, name, &content).await {
            warn!("Rare catch announcement for {} failed: {}", name, e);
        }
    }

    let send = async {
        let attachment = CreateAttachment::path(image).await?;
        msg.channel_id
            .send_message(
                &ctx.http,
                CreateMessage::new().content(&content).add_file(attachment),
            )
            .await?;
        Ok::<(), serenity::Error>(())
    };
    if let Err(e) = send.await {
        warn!(
            "Failed to deliver catch result to channel {}: {}",
            msg.channel_id, e
        );
    }
}

/// Posts the enriched embed to the first channel whose name contains the
/// configured keyword. Missing guild or channel is not an error; the
/// announcement just does not happen.
async fn announce_rare(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    name: &str,
    content: &str,
) -> Result<(), BotError> {
    let Some(guild_id) = msg.guild_id else {
        return Ok(());
    };

    let channels = guild_id.channels(&ctx.http).await?;
    let keyword = &state.settings.rare_channel_keyword;
    let Some(channel) = channels.values().find(|c| c.name.contains(keyword)) else {
        warn!("No channel matching '{}' for rare announcement", keyword);
        return Ok(());
    };

    let embed = CreateEmbed::new()
        .description(content)
        .colour(0xFFFFFF)
        .thumbnail(rarity::sprite_thumbnail_url(name))
        .image(rarity::animated_sprite_url(name));
    channel
        .id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;
    Ok(())
}

/// Operator-only: rebuilds the asset index and re-reads trainer state from
/// disk. The old index stays in place if the rebuild fails.
pub async fn reload(ctx: &Context, msg: &Message, state: &AppState) -> Result<(), BotError> {
    if !state.settings.is_operator(msg.author.id.get()) {
        return Ok(());
    }

    match AssetIndex::build(&state.settings.assets_path()) {
        Ok(index) => {
            info!("Rebuilt asset index ({} pokemon)", index.len());
            *state.assets.write() = index;
        }
        Err(e) => {
            error!("Asset reload failed, keeping previous index: {}", e);
            msg.channel_id
                .say(&ctx.http, "Reload failed. See the log for details.")
                .await?;
            return Ok(());
        }
    }

    state.trainers.lock().reload();
    msg.channel_id.say(&ctx.http, "Reload complete.").await?;
    Ok(())
}
