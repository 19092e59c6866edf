//! Spending category aggregation and advisory observations
//!
//! Turns a flat list of labeled amounts into per-category totals plus a small
//! set of rule-derived suggestion strings. Aggregation is deliberately
//! lenient: rows with an empty category or an unparsable amount are dropped
//! without a count or warning.

use std::collections::HashMap;

use crate::models::{CategoryTotal, Money, SpendingRecord};

/// Share of total spending above which a food category triggers a suggestion
const FOOD_SHARE_PERCENT: f64 = 20.0;

/// Share of total spending above which an entertainment category triggers one
const ENTERTAINMENT_SHARE_PERCENT: f64 = 15.0;

/// Absolute coffee spend above which a suggestion fires
const COFFEE_THRESHOLD: Money = Money::from_whole(100);

/// Fallback observation when no rule fires
const BALANCED_MESSAGE: &str = "Your spending looks balanced. Great job!";

/// Result of aggregating a batch of spending records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingAnalysis {
    /// Per-category totals in first-appearance order
    pub totals: Vec<CategoryTotal>,
    /// Advisory strings derived from the totals; never empty
    pub observations: Vec<String>,
}

impl SpendingAnalysis {
    /// Sum across every category
    pub fn grand_total(&self) -> Money {
        self.totals
            .iter()
            .fold(Money::zero(), |acc, t| acc + t.total)
    }

    /// A category's share of the grand total, in percent
    pub fn share_percent(&self, total: Money) -> f64 {
        let grand = self.grand_total();
        if grand.is_zero() {
            0.0
        } else {
            total.cents() as f64 / grand.cents() as f64 * 100.0
        }
    }
}

/// Aggregate records into category totals and derive observations
///
/// Categories are keyed by exact string match — labels differing only in case
/// or whitespace stay distinct. Display order is the order each label first
/// appeared; palette colors follow that order, so reordered input can recolor
/// the same category.
pub fn aggregate(records: &[SpendingRecord]) -> SpendingAnalysis {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index_by_category: HashMap<String, usize> = HashMap::new();

    for record in records {
        let category = record.category.trim();
        if category.is_empty() {
            continue;
        }
        let Ok(amount) = Money::parse(&record.amount) else {
            continue;
        };

        match index_by_category.get(record.category.as_str()) {
            Some(&i) => totals[i].total += amount,
            None => {
                let color_index = totals.len();
                index_by_category.insert(record.category.clone(), color_index);
                totals.push(CategoryTotal {
                    category: record.category.clone(),
                    total: amount,
                    color_index,
                });
            }
        }
    }

    let mut analysis = SpendingAnalysis {
        totals,
        observations: Vec::new(),
    };
    let observations = derive_observations(&analysis);
    analysis.observations = observations;
    analysis
}

/// Apply the advisory rules to a set of totals
///
/// Rules are evaluated per category and independently; every match is
/// included. With no match at all, the single balanced-spending message is
/// returned instead.
fn derive_observations(analysis: &SpendingAnalysis) -> Vec<String> {
    let mut observations = Vec::new();

    for total in &analysis.totals {
        let share = analysis.share_percent(total.total);
        let label = total.category.to_lowercase();

        if label.contains("food") && share > FOOD_SHARE_PERCENT {
            observations.push(format!(
                "{} accounts for {:.0}% of your spending. Planning meals ahead could bring that down.",
                total.category, share
            ));
        }
        if label.contains("entertainment") && share > ENTERTAINMENT_SHARE_PERCENT {
            observations.push(format!(
                "Your {} spending is {:.0}% of your total. Consider setting a monthly entertainment budget.",
                total.category, share
            ));
        }
        if label.contains("coffee") && total.total > COFFEE_THRESHOLD {
            observations.push(format!(
                "You spent {} on {}. Brewing at home could cut that substantially.",
                total.total, total.category
            ));
        }
    }

    if observations.is_empty() {
        observations.push(BALANCED_MESSAGE.to_string());
    }
    observations
}
