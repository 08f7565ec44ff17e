use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod commands;
mod models;
mod services;
mod utils;

use config::Config;
use db::BalanceStore;

struct Handler;

struct BotConfig;

impl TypeMapKey for BotConfig {
    type Value = Arc<Config>;
}

struct Ledger;

impl TypeMapKey for Ledger {
    type Value = Arc<BalanceStore>;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    for directive in ["ltc_tipbot=debug", "serenity=warn"] {
        match directive.parse::<Directive>() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Bad log directive {}: {}", directive, e),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting Litecoin tip bot...");

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.json".to_string());
    let config = match Config::load(&config_path) {
        Ok(c) => {
            info!("Loaded config from {} ({} operators)", config_path, c.owner_ids.len());
            c
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            return;
        }
    };

    let balance_file = std::env::var("BALANCE_FILE").unwrap_or_else(|_| "balances.json".to_string());
    let store = BalanceStore::new(balance_file);
    if !store.path().exists() {
        warn!("Balance file {} does not exist yet, it will be created on first write", store.path().display());
    }

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILDS;

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    // Store the config and balance store in client data
    {
        let mut data = client.data.write().await;
        data.insert::<BotConfig>(Arc::new(config));
        data.insert::<Ledger>(Arc::new(store));
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
