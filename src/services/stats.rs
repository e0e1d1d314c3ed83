use anyhow::{Context, Result};
use log::{info, warn};

use crate::api::ApiDataSource;
use crate::config::{AppConfig, ConfigStore};
use crate::domain::PlayerStatsRecord;
use crate::format::stats_lines;
use crate::output::Chat;
use crate::services::resolver::StatsResolver;

/// The `stats` command
pub struct StatsService {
    resolver: StatsResolver<ApiDataSource>,
    store: ConfigStore,
    chat: Chat,
}

impl StatsService {
    pub fn new(config: AppConfig, store: ConfigStore, chat: Chat) -> Result<Self> {
        let source = ApiDataSource::new(&config.http)?;
        Ok(Self {
            resolver: StatsResolver::new(source),
            store,
            chat,
        })
    }

    pub async fn run(&self, player: &str, json: bool) -> Result<()> {
        info!("Getting stats for {}", player);

        let api_key = self.store.api_key();
        if api_key.is_none() {
            warn!(
                "No API key in {}; run `set-api-key` first",
                self.store.path().display()
            );
        }

        let pending = self.resolver.resolve(player, api_key);
        let record = pending.wait().await;

        if json {
            self.print_json(&record)
        } else {
            self.print_lines(&record, player);
            Ok(())
        }
    }

    fn print_lines(&self, record: &PlayerStatsRecord, player: &str) {
        for line in stats_lines(record, player) {
            self.chat.small(&line);
        }
    }

    fn print_json(&self, record: &PlayerStatsRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record).context("Failed to serialize stats")?;
        println!("{}", json);
        Ok(())
    }
}
