//! Stat Aggregation
//!
//! Turns raw `{used, total}` capacity pairs into chart percentages.

use crate::state::models::ChartStat;

/// Percentage derived from one [`ChartStat`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPercentage {
    pub id: String,
    pub label: String,
    /// Always within 0..=100
    pub value: u8,
}

/// Integer share of `used` over `total`, in 0..=100.
///
/// Zero, negative or non-finite inputs give 0. `used > total` clamps to 100.
pub fn percentage(used: f64, total: f64) -> u8 {
    if !used.is_finite() || !total.is_finite() || used <= 0.0 || total <= 0.0 {
        return 0;
    }

    let ratio = (used / total).min(1.0);
    (ratio * 100.0).round() as u8
}

/// Derive one percentage per stat, preserving order
pub fn aggregate(stats: &[ChartStat]) -> Vec<ChartPercentage> {
    stats
        .iter()
        .map(|stat| ChartPercentage {
            id: stat.id.clone(),
            label: stat.label.clone(),
            value: percentage(stat.used, stat.total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(used: f64, total: f64) -> ChartStat {
        ChartStat {
            id: "1".to_string(),
            label: "Trucks".to_string(),
            used,
            total,
        }
    }

    #[test]
    fn test_basic_percentage() {
        assert_eq!(percentage(50.0, 200.0), 25);
        assert_eq!(percentage(80.0, 200.0), 40);
        assert_eq!(percentage(200.0, 200.0), 100);
    }

    #[test]
    fn test_rounding() {
        // 1/3 -> 33.33
        assert_eq!(percentage(1.0, 3.0), 33);
        // 2/3 -> 66.67
        assert_eq!(percentage(2.0, 3.0), 67);
        // 1/8 -> 12.5 rounds up
        assert_eq!(percentage(1.0, 8.0), 13);
    }

    #[test]
    fn test_zero_total_is_zero() {
        assert_eq!(percentage(0.0, 0.0), 0);
        assert_eq!(percentage(25.0, 0.0), 0);
    }

    #[test]
    fn test_zero_used_is_zero() {
        assert_eq!(percentage(0.0, 150.0), 0);
    }

    #[test]
    fn test_used_above_total_clamps() {
        assert_eq!(percentage(300.0, 200.0), 100);
    }

    #[test]
    fn test_malformed_inputs_are_zero() {
        assert_eq!(percentage(-5.0, 100.0), 0);
        assert_eq!(percentage(5.0, -100.0), 0);
        assert_eq!(percentage(f64::NAN, 100.0), 0);
        assert_eq!(percentage(10.0, f64::INFINITY), 0);
    }

    #[test]
    fn test_bounded_for_valid_inputs() {
        for total in 1..=60u32 {
            for used in 0..=total {
                let expected = (used as f64 / total as f64 * 100.0).round() as u8;
                let value = percentage(used as f64, total as f64);
                assert_eq!(value, expected, "used={} total={}", used, total);
                assert!(value <= 100);
            }
        }
    }

    #[test]
    fn test_aggregate_keeps_order_and_labels() {
        let mut second = stat(30.0, 60.0);
        second.id = "2".to_string();
        second.label = "Vans".to_string();

        let result = aggregate(&[stat(50.0, 200.0), second]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].value, 25);
        assert_eq!(result[1].label, "Vans");
        assert_eq!(result[1].value, 50);
    }
}
