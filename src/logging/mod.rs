//! Logging setup for PokeBot
//! RUST_LOG overrides the default filter.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokebot=info,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
