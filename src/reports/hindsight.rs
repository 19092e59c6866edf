//! Hindsight Report
//!
//! Renders the actual-vs-alternative series for a past lump sum, with the
//! opportunity cost of not having invested it.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::FincastResult;
use crate::models::{AlternativePoint, Money};
use crate::services::hindsight::{lump_sum_growth, opportunity_cost};

/// Hindsight Report
#[derive(Debug, Clone)]
pub struct HindsightReport {
    /// The lump sum being analyzed
    pub amount: Money,
    /// Annual return assumed for the alternative path, as a fraction
    pub annual_rate: f64,
    /// The 13-point comparison series
    pub points: Vec<AlternativePoint>,
}

impl HindsightReport {
    /// Generate a hindsight report anchored to `today`
    pub fn generate(amount: Money, annual_rate: f64, today: NaiveDate) -> Self {
        let points = lump_sum_growth(amount, annual_rate, today);
        Self {
            amount,
            annual_rate,
            points,
        }
    }

    /// Final alternative value minus the original amount
    pub fn opportunity_cost(&self) -> Money {
        opportunity_cost(&self.points, self.amount)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Hindsight Analysis\n");
        output.push_str(&"=".repeat(52));
        output.push('\n');
        output.push_str(&format!("Amount:            {:>12}\n", self.amount));
        output.push_str(&format!(
            "Assumed return:    {:>11.1}%\n",
            self.annual_rate * 100.0
        ));
        output.push('\n');

        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            "Month", "Actual", "Invested"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14}\n",
                point.label,
                point.actual.to_string(),
                point.alternative.to_string()
            ));
        }

        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!("Opportunity cost: {}\n", self.opportunity_cost()));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincastResult<()> {
        writeln!(writer, "Month,Actual,Alternative")
            .map_err(|e| crate::error::FincastError::Export(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{:.2},{:.2}",
                point.label,
                point.actual.cents() as f64 / 100.0,
                point.alternative.cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::FincastError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
