//! Spending record and category aggregation types

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Chart palette shared with the spending breakdown
///
/// Colors attach to categories by assignment order, not identity: the first
/// category gets the first color, wrapping around when the palette runs out.
pub const COLOR_PALETTE: [&str; 6] = [
    "#4FD1C5", "#9b87f5", "#FC8181", "#68D391", "#F6E05E", "#7E69AB",
];

/// A raw ingested spending row, prior to any validation
///
/// The amount stays a string on purpose: aggregation applies the lenient-parse
/// policy (skip what does not parse) rather than ingestion rejecting rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingRecord {
    /// Free-text category label, the aggregation key
    pub category: String,
    /// Amount as it appeared in the source
    pub amount: String,
}

impl SpendingRecord {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
        }
    }
}

/// Summed spending for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label, matched case-sensitively during aggregation
    pub category: String,
    /// Sum of all amounts recorded under this label
    pub total: Money,
    /// Position-derived palette slot, not tied to category identity
    pub color_index: usize,
}

impl CategoryTotal {
    /// Palette color for this category's slot
    pub fn color(&self) -> &'static str {
        COLOR_PALETTE[self.color_index % COLOR_PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_wraps_around_palette() {
        let total = CategoryTotal {
            category: "Other".into(),
            total: Money::zero(),
            color_index: COLOR_PALETTE.len() + 1,
        };
        assert_eq!(total.color(), COLOR_PALETTE[1]);
    }
}
