use log::debug;
use serde_json::Value;

use crate::domain::{
    BedwarsCounters, DEFAULT_PAID_RANK, DEFAULT_RANK, PlayerIdentity, PlayerStatsRecord, Star,
};

const SUPERSTAR: &str = "SUPERSTAR";
const MVP_PLUS_PLUS: &str = "MVP_PLUS_PLUS";

/// Turn a Hypixel player document into a stats record
pub fn shape_record(identity: PlayerIdentity, payload: &Value) -> PlayerStatsRecord {
    let player = extract_player(payload);

    let Some(player) = player.filter(|_| !identity.is_nicked) else {
        debug!("Treating {} as nicked", identity.name);
        return PlayerStatsRecord::nicked(identity);
    };

    let star = extract_star(player);
    PlayerStatsRecord {
        identity,
        rank: extract_rank(player),
        paid_rank: extract_paid_rank(player),
        bw_stats: extract_counters(player).into_stats(star),
    }
}

fn extract_player(payload: &Value) -> Option<&Value> {
    payload.get("player").filter(|player| !player.is_null())
}

fn extract_rank(player: &Value) -> String {
    non_empty_str(player, "rank")
        .unwrap_or(DEFAULT_RANK)
        .to_string()
}

fn extract_paid_rank(player: &Value) -> String {
    if non_empty_str(player, "monthlyPackageRank") == Some(SUPERSTAR) {
        return MVP_PLUS_PLUS.to_string();
    }
    non_empty_str(player, "newPackageRank")
        .unwrap_or(DEFAULT_PAID_RANK)
        .to_string()
}

fn extract_counters(player: &Value) -> BedwarsCounters {
    let bedwars = player.get("stats").and_then(|stats| stats.get("Bedwars"));
    let counter = |field: &str| {
        bedwars
            .and_then(|bedwars| bedwars.get(field))
            .and_then(as_integer)
            .unwrap_or(0)
    };

    BedwarsCounters {
        final_kills: counter("final_kills_bedwars"),
        beds_broken: counter("beds_broken_bedwars"),
        wins: counter("wins_bedwars"),
        kills: counter("kills_bedwars"),
        deaths: counter("deaths_bedwars"),
        losses: counter("losses_bedwars"),
        final_deaths: counter("final_deaths_bedwars"),
        beds_lost: counter("beds_lost_bedwars"),
    }
}

fn extract_star(player: &Value) -> Star {
    let level = player
        .get("achievements")
        .and_then(|achievements| achievements.get("bedwars_level"))
        .and_then(as_integer)
        .filter(|level| *level >= 0)
        .unwrap_or(0);
    Star::Level(level)
}

fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|v| v.is_finite()).map(|v| v as i64))
}
