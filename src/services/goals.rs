//! Goal progress arithmetic
//!
//! Linear progress toward a savings goal: capped percentage complete,
//! humanized time remaining, and the flat monthly contribution that would
//! land the goal on its target date.

use chrono::NaiveDate;

use crate::models::{Goal, Money};

/// Days treated as one month when humanizing durations
const DAYS_PER_MONTH: i64 = 30;

/// Percentage of the target reached so far, rounded and capped at 100
///
/// A non-positive target saturates to 100 rather than dividing by zero; goal
/// entry points refuse such targets, so this only guards the arithmetic.
pub fn progress_percent(current: Money, target: Money) -> u8 {
    if !target.is_positive() {
        return 100;
    }
    if current.is_negative() {
        return 0;
    }
    let pct = (current.cents() as f64 / target.cents() as f64 * 100.0).round();
    pct.min(100.0) as u8
}

/// Humanized time remaining until the target date
///
/// "Overdue", "Due today", then day granularity under 30 days, 30-day month
/// granularity under a year, and years beyond that. Partial units round up.
pub fn time_left(target_date: NaiveDate, today: NaiveDate) -> String {
    let diff_days = (target_date - today).num_days();

    if diff_days < 0 {
        return "Overdue".to_string();
    }
    if diff_days == 0 {
        return "Due today".to_string();
    }
    if diff_days == 1 {
        return "1 day left".to_string();
    }
    if diff_days < DAYS_PER_MONTH {
        return format!("{} days left", diff_days);
    }

    let diff_months = (diff_days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH;
    if diff_months == 1 {
        return "1 month left".to_string();
    }
    if diff_months < 12 {
        return format!("{} months left", diff_months);
    }

    let diff_years = (diff_months + 12 - 1) / 12;
    if diff_years == 1 {
        "1 year left".to_string()
    } else {
        format!("{} years left", diff_years)
    }
}

/// Flat monthly contribution needed to fund the goal by its target date
///
/// Remaining amount divided across the months left (at least one, so an
/// imminent goal asks for the whole remainder). Zero once the target is met.
pub fn monthly_contribution_needed(goal: &Goal, today: NaiveDate) -> Money {
    let remaining = goal.remaining();
    if remaining.is_zero() {
        return Money::zero();
    }

    let diff_days = (goal.target_date - today).num_days();
    let months = (diff_days / DAYS_PER_MONTH).max(1);
    Money::from_cents(remaining.cents() / months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(
            progress_percent(Money::from_whole(6_500), Money::from_whole(10_000)),
            65
        );
        assert_eq!(
            progress_percent(Money::from_whole(2_800), Money::from_whole(5_000)),
            56
        );
    }

    #[test]
    fn test_progress_caps_at_100() {
        assert_eq!(
            progress_percent(Money::from_whole(12_000), Money::from_whole(10_000)),
            100
        );
    }

    #[test]
    fn test_progress_rounds() {
        // 1/3 of the way = 33.33..% -> 33.
        assert_eq!(
            progress_percent(Money::from_whole(1), Money::from_whole(3)),
            33
        );
    }

    #[test]
    fn test_progress_degenerate_inputs() {
        assert_eq!(progress_percent(Money::from_whole(5), Money::zero()), 100);
        assert_eq!(
            progress_percent(Money::from_whole(-5), Money::from_whole(10)),
            0
        );
    }

    #[test]
    fn test_time_left_boundaries() {
        let today = date(2026, 8, 6);
        assert_eq!(time_left(date(2026, 8, 5), today), "Overdue");
        assert_eq!(time_left(date(2026, 8, 6), today), "Due today");
        assert_eq!(time_left(date(2026, 8, 7), today), "1 day left");
        assert_eq!(time_left(date(2026, 8, 20), today), "14 days left");
    }

    #[test]
    fn test_time_left_months_and_years() {
        let today = date(2026, 8, 6);
        assert_eq!(time_left(date(2026, 9, 5), today), "1 month left");
        assert_eq!(time_left(date(2026, 12, 31), today), "5 months left");
        assert_eq!(time_left(date(2028, 8, 6), today), "3 years left");
    }

    #[test]
    fn test_monthly_contribution() {
        let goal = Goal::new(
            "Emergency Fund",
            Money::from_whole(10_000),
            Money::from_whole(6_500),
            date(2026, 12, 31),
            "Savings",
        );
        // 147 days left -> 4 whole months for 3,500 remaining.
        let needed = monthly_contribution_needed(&goal, date(2026, 8, 6));
        assert_eq!(needed, Money::from_cents(3_500_00 / 4));
    }

    #[test]
    fn test_monthly_contribution_imminent_goal_asks_for_remainder() {
        let goal = Goal::new(
            "Vacation",
            Money::from_whole(5_000),
            Money::from_whole(2_800),
            date(2026, 8, 20),
            "Travel",
        );
        let needed = monthly_contribution_needed(&goal, date(2026, 8, 6));
        assert_eq!(needed, Money::from_whole(2_200));
    }

    #[test]
    fn test_monthly_contribution_met_goal_is_zero() {
        let goal = Goal::new(
            "Done",
            Money::from_whole(1_000),
            Money::from_whole(1_000),
            date(2026, 12, 31),
            "Savings",
        );
        assert_eq!(
            monthly_contribution_needed(&goal, date(2026, 8, 6)),
            Money::zero()
        );
    }
}
