use crate::domain::StatValue;

/// Shown instead of a ratio that cannot be computed
pub const RATIO_SENTINEL: f64 = 0.0;

pub fn coerce_nan(value: f64, fallback: f64) -> f64 {
    if value.is_nan() { fallback } else { value }
}

/// Two-decimal ratio of two counters; unknown counters and a zero denominator give the sentinel.
pub fn ratio(numerator: StatValue, denominator: StatValue) -> f64 {
    let (Some(numerator), Some(denominator)) = (numerator.as_f64(), denominator.as_f64()) else {
        return RATIO_SENTINEL;
    };

    let quotient = round_two_decimals(numerator / denominator);
    if quotient.is_infinite() {
        return RATIO_SENTINEL;
    }
    coerce_nan(quotient, RATIO_SENTINEL)
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_nan() {
        assert_eq!(coerce_nan(f64::NAN, 0.0), 0.0);
        assert_eq!(coerce_nan(1.5, 0.0), 1.5);
    }

    #[test]
    fn test_zero_losses_gives_sentinel() {
        assert_eq!(ratio(StatValue::Known(100), StatValue::Known(0)), RATIO_SENTINEL);
    }

    #[test]
    fn test_zero_over_zero_gives_sentinel() {
        assert_eq!(ratio(StatValue::Known(0), StatValue::Known(0)), RATIO_SENTINEL);
    }

    #[test]
    fn test_unknown_counters_give_sentinel() {
        assert_eq!(ratio(StatValue::Unknown, StatValue::Unknown), RATIO_SENTINEL);
        assert_eq!(ratio(StatValue::Known(3), StatValue::Unknown), RATIO_SENTINEL);
    }

    #[test]
    fn test_ratio_rounds_to_two_decimals() {
        assert_eq!(ratio(StatValue::Known(2), StatValue::Known(3)), 0.67);
        assert_eq!(ratio(StatValue::Known(10), StatValue::Known(4)), 2.5);
    }
}
