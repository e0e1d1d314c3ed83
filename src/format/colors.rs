use std::fmt;

/// Which threshold table a value is coloured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioKind {
    Fkdr,
    Wlr,
    Bblr,
    Kdr,
    Finals,
}

/// Display colour for a stat, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Gray,
    White,
    Gold,
    DarkAqua,
    DarkRed,
    DarkPurple,
    /// Exactly on the top threshold, or NaN: no branch matches and no colour is applied
    Boundary,
}

impl ColorTier {
    const ASCENDING: [ColorTier; 5] = [
        ColorTier::Gray,
        ColorTier::White,
        ColorTier::Gold,
        ColorTier::DarkAqua,
        ColorTier::DarkRed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ColorTier::Gray => "&7",
            ColorTier::White => "&f",
            ColorTier::Gold => "&6",
            ColorTier::DarkAqua => "&3",
            ColorTier::DarkRed => "&4",
            ColorTier::DarkPurple => "&5",
            ColorTier::Boundary => "",
        }
    }
}

impl fmt::Display for ColorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl RatioKind {
    /// Exclusive upper bounds of the five lower tiers
    fn thresholds(&self) -> [f64; 5] {
        match self {
            RatioKind::Fkdr | RatioKind::Kdr => [1.0, 3.0, 5.0, 10.0, 25.0],
            RatioKind::Wlr | RatioKind::Bblr => [1.0, 2.0, 5.0, 7.0, 10.0],
            RatioKind::Finals => [1000.0, 5000.0, 10000.0, 20000.0, 30000.0],
        }
    }
}

pub fn colorize(value: f64, kind: RatioKind) -> ColorTier {
    let thresholds = kind.thresholds();

    for (tier, bound) in ColorTier::ASCENDING.iter().zip(thresholds) {
        if value < bound {
            return *tier;
        }
    }

    if value > thresholds[4] {
        ColorTier::DarkPurple
    } else {
        ColorTier::Boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fkdr_extremes() {
        assert_eq!(colorize(0.5, RatioKind::Fkdr), ColorTier::Gray);
        assert_eq!(colorize(30.0, RatioKind::Fkdr), ColorTier::DarkPurple);
    }

    #[test]
    fn test_lower_thresholds_fall_into_next_tier() {
        assert_eq!(colorize(1.0, RatioKind::Fkdr), ColorTier::White);
        assert_eq!(colorize(2.0, RatioKind::Wlr), ColorTier::Gold);
        assert_eq!(colorize(1000.0, RatioKind::Finals), ColorTier::White);
    }

    #[test]
    fn test_top_threshold_is_boundary() {
        assert_eq!(colorize(25.0, RatioKind::Kdr), ColorTier::Boundary);
        assert_eq!(colorize(10.0, RatioKind::Bblr), ColorTier::Boundary);
        assert_eq!(colorize(30000.0, RatioKind::Finals), ColorTier::Boundary);
        assert_eq!(ColorTier::Boundary.code(), "");
    }

    #[test]
    fn test_nan_is_boundary() {
        assert_eq!(colorize(f64::NAN, RatioKind::Wlr), ColorTier::Boundary);
    }

    #[test]
    fn test_wlr_and_bblr_share_table() {
        for value in [0.2, 1.5, 3.0, 6.0, 9.0, 12.0] {
            assert_eq!(colorize(value, RatioKind::Wlr), colorize(value, RatioKind::Bblr));
        }
        assert_eq!(colorize(6.0, RatioKind::Wlr), ColorTier::DarkAqua);
        assert_eq!(colorize(9.0, RatioKind::Wlr), ColorTier::DarkRed);
    }
}
