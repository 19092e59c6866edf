//! Scenario Projection Report
//!
//! Renders the 12-month baseline-vs-scenario series for terminal display or
//! CSV export.

use std::io::Write;

use crate::error::FincastResult;
use crate::models::{Money, TimelinePoint};
use crate::services::projection::{project, ScenarioParams};

/// Scenario Projection Report
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    /// Inputs the projection ran with
    pub params: ScenarioParams,
    /// The computed series, one point per calendar month
    pub points: Vec<TimelinePoint>,
}

impl ProjectionReport {
    /// Generate a projection report
    pub fn generate(params: ScenarioParams) -> Self {
        let points = project(&params);
        Self { params, points }
    }

    /// Scenario minus baseline at the final month
    pub fn year_end_difference(&self) -> Money {
        self.points
            .last()
            .map(|p| p.scenario.unwrap_or(p.baseline) - p.baseline)
            .unwrap_or_else(Money::zero)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str("Scenario Projection\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Monthly income:    {:>12}\n",
            self.params.monthly_income
        ));
        output.push_str(&format!(
            "Monthly expenses:  {:>12}\n",
            self.params.monthly_expenses
        ));
        output.push_str(&format!(
            "Monthly savings:   {:>12}\n",
            self.params.monthly_savings()
        ));
        output.push_str(&format!(
            "Annual return:     {:>11.1}%\n",
            self.params.annual_return_percent
        ));
        if let Some(purchase) = self.params.purchase {
            output.push_str(&format!(
                "Planned purchase:  {:>12} in {}\n",
                purchase.amount, purchase.month
            ));
        }
        output.push('\n');

        // Column headers
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>12}\n",
            "Month", "Baseline", "Scenario", "Diff"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for point in &self.points {
            let scenario = point.scenario.unwrap_or(point.baseline);
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>12}\n",
                point.label(),
                point.baseline.to_string(),
                scenario.to_string(),
                (scenario - point.baseline).to_string()
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Year-end difference vs. baseline: {}\n",
            self.year_end_difference()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincastResult<()> {
        writeln!(writer, "Month,Baseline,Scenario,Difference")
            .map_err(|e| crate::error::FincastError::Export(e.to_string()))?;

        for point in &self.points {
            let scenario = point.scenario.unwrap_or(point.baseline);
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                point.label(),
                point.baseline.cents() as f64 / 100.0,
                scenario.cents() as f64 / 100.0,
                (scenario - point.baseline).cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::FincastError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;
    use crate::services::projection::PlannedPurchase;

    fn sample_params() -> ScenarioParams {
        ScenarioParams {
            monthly_income: Money::from_whole(5_000),
            monthly_expenses: Money::from_whole(3_000),
            annual_return_percent: 0.0,
            purchase: Some(PlannedPurchase {
                amount: Money::from_whole(1_000),
                month: Month::Jun,
            }),
        }
    }

    #[test]
    fn test_generate_projection_report() {
        let report = ProjectionReport::generate(sample_params());
        assert_eq!(report.points.len(), 12);
        // Dec: anchored to Nov baseline 83,000 + 2,000 savings.
        assert_eq!(report.year_end_difference(), Money::from_whole(-1_000));
    }

    #[test]
    fn test_format_terminal() {
        let output = ProjectionReport::generate(sample_params()).format_terminal();
        assert!(output.contains("Scenario Projection"));
        assert!(output.contains("Jan 2026"));
        assert!(output.contains("Dec 2026"));
        assert!(output.contains("Planned purchase"));
    }

    #[test]
    fn test_csv_export() {
        let report = ProjectionReport::generate(sample_params());

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.starts_with("Month,Baseline,Scenario,Difference"));
        assert_eq!(csv_string.lines().count(), 13);
        assert!(csv_string.contains("Jan 2026,52000.00,54000.00,2000.00"));
    }
}
