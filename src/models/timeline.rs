//! Timeline point types and the fixed baseline series
//!
//! The scenario projection compares against a constant reference series: one
//! net-worth value per calendar month of the projection year. The baseline is
//! independent of user input; only the scenario side of each point varies.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::Month;

/// Calendar year the baseline series is anchored to
pub const BASELINE_YEAR: i32 = 2026;

/// Reference net-worth values in whole currency units, one per month
const BASELINE_UNITS: [i64; 12] = [
    52_000, 55_000, 58_000, 62_000, 65_000, 68_000, 71_000, 74_000, 77_000, 80_000, 83_000, 86_000,
];

/// One month of the comparative projection timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Calendar month of this point
    pub month: Month,
    /// Reference net worth, independent of user input
    pub baseline: Money,
    /// Projected net worth under the user's scenario, absent until computed
    pub scenario: Option<Money>,
}

impl TimelinePoint {
    /// Chart-style label including the anchor year ("Jan 2026")
    pub fn label(&self) -> String {
        format!("{} {}", self.month, BASELINE_YEAR)
    }
}

/// The fixed reference series with no scenario values attached
pub fn baseline_series() -> Vec<TimelinePoint> {
    Month::ALL
        .into_iter()
        .zip(BASELINE_UNITS)
        .map(|(month, units)| TimelinePoint {
            month,
            baseline: Money::from_whole(units),
            scenario: None,
        })
        .collect()
}

/// Baseline value for a single month
pub fn baseline_value(month: Month) -> Money {
    Money::from_whole(BASELINE_UNITS[month.index()])
}

/// One month of an actual-vs-alternative comparison series
///
/// Produced by the hindsight analysis: `actual` holds the lump sum at month
/// zero and nothing afterwards, `alternative` holds the compounding value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativePoint {
    /// Date-relative label ("Aug 2025")
    pub label: String,
    /// What actually happened to the money
    pub actual: Money,
    /// What the money would be worth invested instead
    pub alternative: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_series_shape() {
        let series = baseline_series();
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].month, Month::Jan);
        assert_eq!(series[0].baseline, Money::from_whole(52_000));
        assert_eq!(series[11].baseline, Money::from_whole(86_000));
        assert!(series.iter().all(|p| p.scenario.is_none()));
    }

    #[test]
    fn test_baseline_value_lookup() {
        assert_eq!(baseline_value(Month::Jun), Money::from_whole(68_000));
    }

    #[test]
    fn test_label_includes_anchor_year() {
        let point = baseline_series()[3];
        assert_eq!(point.label(), "Apr 2026");
    }
}
