//! Scenario projection engine
//!
//! Produces the comparative 12-month net-worth series: a fixed baseline per
//! calendar month plus a scenario value derived from the user's income,
//! expenses, expected return, and an optional one-time purchase.
//!
//! The scenario is additively anchored to the *previous baseline* point each
//! step rather than the previous scenario point, so the projection never
//! compounds on itself month-over-month. That matches the shipped behavior of
//! the product this engine reproduces and is preserved deliberately.

use crate::models::{baseline_series, baseline_value, Money, Month, TimelinePoint};

/// A one-time purchase applied to a single month of the scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedPurchase {
    /// Purchase cost, subtracted after growth is applied
    pub amount: Money,
    /// Month the purchase lands in
    pub month: Month,
}

/// Inputs to the scenario projection
///
/// Nothing is range-checked: negative savings or returns produce negative or
/// degenerate output rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParams {
    /// Gross monthly income
    pub monthly_income: Money,
    /// Total monthly expenses
    pub monthly_expenses: Money,
    /// Expected annual return on invested savings, in percent (7.0 = 7%)
    pub annual_return_percent: f64,
    /// Optional one-time purchase
    pub purchase: Option<PlannedPurchase>,
}

impl ScenarioParams {
    /// Income minus expenses; may be negative
    pub fn monthly_savings(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }
}

/// Project the 12-month scenario series against the fixed baseline
///
/// Always returns exactly twelve points, one per calendar month in order,
/// each with its scenario value filled in and rounded to the nearest whole
/// currency unit.
pub fn project(params: &ScenarioParams) -> Vec<TimelinePoint> {
    let monthly_savings = params.monthly_savings();
    let monthly_rate = params.annual_return_percent / 100.0 / 12.0;

    baseline_series()
        .into_iter()
        .enumerate()
        .map(|(i, mut point)| {
            // Anchor to the previous month's baseline, not the prior scenario.
            let anchor = if i == 0 {
                point.baseline
            } else {
                baseline_value(Month::ALL[i - 1])
            };

            let mut scenario = (anchor + monthly_savings).as_units();
            scenario *= 1.0 + monthly_rate;

            if let Some(purchase) = params.purchase {
                if purchase.month == point.month {
                    scenario -= purchase.amount.as_units();
                }
            }

            point.scenario = Some(Money::round_units(scenario));
            point
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(income: i64, expenses: i64, rate: f64) -> ScenarioParams {
        ScenarioParams {
            monthly_income: Money::from_whole(income),
            monthly_expenses: Money::from_whole(expenses),
            annual_return_percent: rate,
            purchase: None,
        }
    }

    #[test]
    fn test_always_twelve_points_in_calendar_order() {
        let series = project(&params(5_000, 3_000, 7.0));
        assert_eq!(series.len(), 12);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.month, Month::ALL[i]);
            assert!(point.scenario.is_some());
        }
    }

    #[test]
    fn test_zero_rate_is_anchor_plus_savings() {
        let series = project(&params(5_000, 3_000, 0.0));
        // Month 0 anchors to its own baseline; later months to the previous one.
        assert_eq!(series[0].scenario, Some(Money::from_whole(54_000)));
        assert_eq!(series[1].scenario, Some(Money::from_whole(54_000)));
        assert_eq!(series[5].scenario, Some(Money::from_whole(67_000)));
        assert_eq!(series[11].scenario, Some(Money::from_whole(85_000)));
    }

    #[test]
    fn test_reanchors_to_baseline_not_scenario() {
        // With zero savings and zero rate the scenario trails the baseline by
        // exactly one month — proof it never compounds on itself.
        let series = project(&params(0, 0, 0.0));
        assert_eq!(series[0].scenario, Some(series[0].baseline));
        for i in 1..12 {
            assert_eq!(series[i].scenario, Some(series[i - 1].baseline));
        }
    }

    #[test]
    fn test_growth_applied_monthly() {
        let series = project(&params(5_000, 3_000, 12.0));
        // 12% annual -> 1% per month on the anchored value.
        assert_eq!(series[0].scenario, Some(Money::round_units(54_000.0 * 1.01)));
        assert_eq!(series[1].scenario, Some(Money::round_units(54_000.0 * 1.01)));
    }

    #[test]
    fn test_purchase_subtracts_exactly_once() {
        let base = params(5_000, 3_000, 0.0);
        let with_purchase = ScenarioParams {
            purchase: Some(PlannedPurchase {
                amount: Money::from_whole(1_000),
                month: Month::Jun,
            }),
            ..base
        };

        let plain = project(&base);
        let purchased = project(&with_purchase);

        for (a, b) in plain.iter().zip(&purchased) {
            if a.month == Month::Jun {
                assert_eq!(
                    b.scenario.unwrap(),
                    a.scenario.unwrap() - Money::from_whole(1_000)
                );
            } else {
                assert_eq!(a.scenario, b.scenario);
            }
        }
    }

    #[test]
    fn test_negative_savings_allowed() {
        let series = project(&params(1_000, 3_000, 0.0));
        assert_eq!(series[0].scenario, Some(Money::from_whole(50_000)));
    }

    #[test]
    fn test_negative_rate_shrinks_scenario() {
        let flat = project(&params(0, 0, 0.0));
        let shrinking = project(&params(0, 0, -12.0));
        assert!(shrinking[3].scenario.unwrap() < flat[3].scenario.unwrap());
    }

    #[test]
    fn test_deterministic() {
        let p = params(4_200, 2_100, 5.5);
        assert_eq!(project(&p), project(&p));
    }
}
