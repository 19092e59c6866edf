//! Hindsight analysis for past decisions
//!
//! Answers "what if that money had been invested instead?" for a single past
//! lump sum: a 13-point series covering the twelve months leading up to now,
//! where the actual path holds the sum at month zero and the alternative path
//! compounds it at a fixed annual rate.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{AlternativePoint, Money, Month};

/// Annual return assumed when the caller does not supply one
pub const DEFAULT_ANNUAL_RETURN: f64 = 0.07;

/// Compound a past lump sum forward to the present
///
/// Returns thirteen points: month 0 is twelve months before `today`, the last
/// point is the current month. `annual_rate` is a fraction (0.07 = 7%).
/// The carried value compounds unrounded; each point is rounded to the
/// nearest whole currency unit for display.
pub fn lump_sum_growth(amount: Money, annual_rate: f64, today: NaiveDate) -> Vec<AlternativePoint> {
    let monthly_rate = (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0;
    let mut carried = amount.as_units();

    (0..=12)
        .map(|i| {
            let date = today - Months::new(12 - i);
            if i > 0 {
                carried *= 1.0 + monthly_rate;
            }
            AlternativePoint {
                label: month_label(date),
                actual: if i == 0 { amount } else { Money::zero() },
                alternative: Money::round_units(carried),
            }
        })
        .collect()
}

/// What the decision cost: final alternative value minus the original amount
pub fn opportunity_cost(series: &[AlternativePoint], amount: Money) -> Money {
    series
        .last()
        .map(|point| point.alternative - amount)
        .unwrap_or_else(Money::zero)
}

fn month_label(date: NaiveDate) -> String {
    format!("{} {}", Month::ALL[date.month0() as usize], date.year())
}
