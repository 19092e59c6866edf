//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A savings goal being tracked toward a target date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Display name ("Emergency Fund")
    pub name: String,
    /// Amount to reach
    pub target_amount: Money,
    /// Amount saved so far
    pub current_amount: Money,
    /// Date the goal should be fully funded by
    pub target_date: NaiveDate,
    /// Grouping label ("Savings", "Housing", "Travel")
    pub category: String,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        target_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
            category: category.into(),
        }
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        if self.current_amount >= self.target_amount {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let goal = Goal::new(
            "Vacation",
            Money::from_whole(5_000),
            Money::from_whole(2_800),
            NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            "Travel",
        );
        assert_eq!(goal.remaining(), Money::from_whole(2_200));
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let goal = Goal::new(
            "Done",
            Money::from_whole(1_000),
            Money::from_whole(1_500),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            "Savings",
        );
        assert_eq!(goal.remaining(), Money::zero());
    }
}
