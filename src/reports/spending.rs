//! Spending Report
//!
//! Renders the per-category breakdown and advisory observations produced by
//! the aggregator.

use std::io::Write;

use crate::display::{format_bar, format_percentage, truncate};
use crate::error::FincastResult;
use crate::models::SpendingRecord;
use crate::services::spending::{aggregate, SpendingAnalysis};

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Aggregated totals and observations
    pub analysis: SpendingAnalysis,
    /// Show only the top N categories in terminal output
    pub top: Option<usize>,
}

impl SpendingReport {
    /// Generate a spending report from raw records
    pub fn generate(records: &[SpendingRecord], top: Option<usize>) -> Self {
        Self {
            analysis: aggregate(records),
            top,
        }
    }

    /// Number of distinct categories
    pub fn category_count(&self) -> usize {
        self.analysis.totals.len()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Spending Analysis\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');

        if self.analysis.totals.is_empty() {
            output.push_str("No spending data to display.\n");
        } else {
            output.push_str(&format!(
                "Total spending: {}\n",
                self.analysis.grand_total()
            ));
            output.push_str(&format!("Categories:     {}\n\n", self.category_count()));

            output.push_str(&format!(
                "{:<25} {:>12} {:>7}  {}\n",
                "Category", "Amount", "%", "Share"
            ));
            output.push_str(&"-".repeat(70));
            output.push('\n');

            let shown = self.top.unwrap_or(self.analysis.totals.len());
            let grand = self.analysis.grand_total();
            for total in self.analysis.totals.iter().take(shown) {
                let share = self.analysis.share_percent(total.total);
                output.push_str(&format!(
                    "{:<25} {:>12} {:>7}  {}\n",
                    truncate(&total.category, 25),
                    total.total.to_string(),
                    format_percentage(share),
                    format_bar(total.total.cents() as f64, grand.cents() as f64, 20)
                ));
            }

            let hidden = self.analysis.totals.len().saturating_sub(shown);
            if hidden > 0 {
                output.push_str(&format!("... and {} more\n", hidden));
            }
        }

        output.push('\n');
        output.push_str("Observations\n");
        output.push_str(&"-".repeat(70));
        output.push('\n');
        for observation in &self.analysis.observations {
            output.push_str(&format!("  - {}\n", observation));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincastResult<()> {
        writeln!(writer, "Category,Amount,Percentage,Color")
            .map_err(|e| crate::error::FincastError::Export(e.to_string()))?;

        for total in &self.analysis.totals {
            writeln!(
                writer,
                "{},{:.2},{:.2},{}",
                total.category,
                total.total.cents() as f64 / 100.0,
                self.analysis.share_percent(total.total),
                total.color()
            )
            .map_err(|e| crate::error::FincastError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
