pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod format;
pub mod http;
pub mod output;
pub mod services;

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::config::store::ConfigStore;
use crate::output::Chat;
use crate::services::api_key::ApiKeyService;
use crate::services::stats::StatsService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_stats(cli: &Cli, player: Option<&str>, json: bool) -> Result<()> {
    let Some(player) = player.or(cli.username.as_deref()) else {
        bail!("No player given; pass one or set --username / MINECRAFT_USERNAME");
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let store = ConfigStore::load(&cli.config)?;
        let service = StatsService::new(config, store, Chat::new(cli.plain))?;
        service.run(player, json).await
    })
}

pub fn handle_set_api_key(cli: &Cli, key: &str) -> Result<()> {
    let store = ConfigStore::load(&cli.config)?;
    let mut service = ApiKeyService::new(store, Chat::new(cli.plain));
    service.run(key)
}
