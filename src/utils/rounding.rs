//! Rounding Utilities
//!
//! Every figure the matcher reports is rounded the same way: half away from
//! zero, which for the non-negative quantities used here is plain half-up.

/// Round to one decimal place (distances, occupancy percentages)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest integer score
pub fn round_score(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_tenth() {
        assert_relative_eq!(round_to_tenth(3.04), 3.0, epsilon = 1e-9);
        assert_relative_eq!(round_to_tenth(3.05), 3.1, epsilon = 1e-9);
        assert_relative_eq!(round_to_tenth(0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_round_score_half_up() {
        assert_eq!(round_score(71.5), 72);
        assert_eq!(round_score(71.4), 71);
        assert_eq!(round_score(0.0), 0);
    }
}
