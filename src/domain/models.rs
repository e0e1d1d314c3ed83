use serde::{Serialize, Serializer};
use std::fmt;

pub const UNKNOWN_UUID: &str = "NULL";
pub const DEFAULT_RANK: &str = "NULL";
pub const DEFAULT_PAID_RANK: &str = "NON";

/// A Bedwars counter, or `?` when the account has no Bedwars history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatValue {
    Known(i64),
    #[default]
    Unknown,
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Known(value) => Some(*value as f64),
            StatValue::Unknown => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Known(value) => write!(f, "{}", value),
            StatValue::Unknown => f.write_str("?"),
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Known(value) => serializer.serialize_i64(*value),
            StatValue::Unknown => serializer.serialize_str("?"),
        }
    }
}

/// Bedwars level, replaced by `NICKED` for unresolved players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Level(i64),
    Nicked,
}

impl Default for Star {
    fn default() -> Self {
        Star::Level(0)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Star::Level(level) => write!(f, "{}", level),
            Star::Nicked => f.write_str("NICKED"),
        }
    }
}

impl Serialize for Star {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Star::Level(level) => serializer.serialize_i64(*level),
            Star::Nicked => serializer.serialize_str("NICKED"),
        }
    }
}

/// Who the looked-up name belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub name: String,
    pub uuid: String,
    pub is_nicked: bool,
}

impl PlayerIdentity {
    pub fn resolved(name: &str, uuid: &str) -> Self {
        Self {
            name: name.to_string(),
            uuid: uuid.to_string(),
            is_nicked: false,
        }
    }

    /// Name with no known UUID; `is_nicked` only when the lookup said "not found"
    pub fn unresolved(name: &str, is_nicked: bool) -> Self {
        Self {
            name: name.to_string(),
            uuid: UNKNOWN_UUID.to_string(),
            is_nicked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedwarsStats {
    pub star: Star,
    pub final_kills: StatValue,
    pub beds_broken: StatValue,
    pub wins: StatValue,
    pub kills: StatValue,
    pub deaths: StatValue,
    pub losses: StatValue,
    pub final_deaths: StatValue,
    pub beds_lost: StatValue,
}

/// Raw Bedwars counters as read from the stats payload, missing ones as 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BedwarsCounters {
    pub final_kills: i64,
    pub beds_broken: i64,
    pub wins: i64,
    pub kills: i64,
    pub deaths: i64,
    pub losses: i64,
    pub final_deaths: i64,
    pub beds_lost: i64,
}

impl BedwarsCounters {
    /// Sum deciding whether the account has any history; `beds_lost` is not part of it.
    /// Saturates instead of overflowing on absurdly large counters.
    pub fn activity(&self) -> i64 {
        [
            self.final_kills,
            self.beds_broken,
            self.wins,
            self.kills,
            self.deaths,
            self.losses,
            self.final_deaths,
        ]
        .into_iter()
        .fold(0, i64::saturating_add)
    }

    pub fn into_stats(self, star: Star) -> BedwarsStats {
        if self.activity() <= 0 {
            return BedwarsStats {
                star,
                ..BedwarsStats::default()
            };
        }

        BedwarsStats {
            star,
            final_kills: StatValue::Known(self.final_kills),
            beds_broken: StatValue::Known(self.beds_broken),
            wins: StatValue::Known(self.wins),
            kills: StatValue::Known(self.kills),
            deaths: StatValue::Known(self.deaths),
            losses: StatValue::Known(self.losses),
            final_deaths: StatValue::Known(self.final_deaths),
            beds_lost: StatValue::Known(self.beds_lost),
        }
    }
}

/// Snapshot handed to the command once a lookup finishes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsRecord {
    #[serde(flatten)]
    pub identity: PlayerIdentity,
    pub rank: String,
    pub paid_rank: String,
    pub bw_stats: BedwarsStats,
}

impl PlayerStatsRecord {
    /// Record shown for nicked players and for any failed lookup
    pub fn nicked(identity: PlayerIdentity) -> Self {
        Self {
            identity: PlayerIdentity {
                is_nicked: true,
                ..identity
            },
            rank: DEFAULT_RANK.to_string(),
            paid_rank: DEFAULT_PAID_RANK.to_string(),
            bw_stats: BedwarsStats {
                star: Star::Nicked,
                ..BedwarsStats::default()
            },
        }
    }

    pub fn placeholder(name: &str) -> Self {
        Self::nicked(PlayerIdentity::unresolved(name, true))
    }

    pub fn is_nicked(&self) -> bool {
        self.identity.is_nicked
    }
}
