use crate::domain::{PlayerStatsRecord, StatValue};
use crate::format::colors::{RatioKind, colorize};
use crate::format::rank::format_rank;
use crate::format::ratio::ratio;

/// Chat lines (with `&` colour codes) describing a player's Bedwars stats
pub fn stats_lines(record: &PlayerStatsRecord, username: &str) -> Vec<String> {
    let stats = &record.bw_stats;
    let label = format_rank(&record.paid_rank, &record.rank, username);

    vec![
        format!("[{}✫] {}'s stats:", stats.star, label),
        format!(
            "Final Kills: {} [FKDR: {}]",
            colored_count(stats.final_kills, RatioKind::Finals),
            colored_ratio(stats.final_kills, stats.final_deaths, RatioKind::Fkdr)
        ),
        format!(
            "Beds Broken: {} [BBLR: {}]",
            stats.beds_broken,
            colored_ratio(stats.beds_broken, stats.beds_lost, RatioKind::Bblr)
        ),
        format!(
            "Wins: {} [WLR: {}]",
            stats.wins,
            colored_ratio(stats.wins, stats.losses, RatioKind::Wlr)
        ),
        format!(
            "Kills: {} [KDR: {}]",
            stats.kills,
            colored_ratio(stats.kills, stats.deaths, RatioKind::Kdr)
        ),
    ]
}

fn colored_ratio(numerator: StatValue, denominator: StatValue, kind: RatioKind) -> String {
    let value = ratio(numerator, denominator);
    format!("{}{:.2}&r", colorize(value, kind), value)
}

fn colored_count(count: StatValue, kind: RatioKind) -> String {
    match count.as_f64() {
        Some(value) => format!("{}{}&r", colorize(value, kind), count),
        None => count.to_string(),
    }
}
