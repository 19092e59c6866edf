//! CLI command for the scenario projection

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::error::{FincastError, FincastResult};
use crate::models::{Money, Month};
use crate::reports::ProjectionReport;
use crate::services::projection::{PlannedPurchase, ScenarioParams};

/// Arguments for the `project` command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Monthly income (e.g. "5000" or "5000.00")
    #[arg(short, long)]
    pub income: String,

    /// Monthly expenses
    #[arg(short, long)]
    pub expenses: String,

    /// Expected annual return in percent (e.g. 7 for 7%)
    #[arg(short = 'r', long, default_value = "0")]
    pub return_rate: f64,

    /// One-time purchase amount (requires --purchase-month)
    #[arg(long, requires = "purchase_month")]
    pub purchase_amount: Option<String>,

    /// Month the purchase lands in (e.g. "Jun")
    #[arg(long, requires = "purchase_amount")]
    pub purchase_month: Option<String>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the project command
pub fn handle_project_command(args: ProjectArgs) -> FincastResult<()> {
    let monthly_income = parse_money(&args.income, "income")?;
    let monthly_expenses = parse_money(&args.expenses, "expenses")?;

    let purchase = match (args.purchase_amount, args.purchase_month) {
        (Some(amount), Some(month)) => {
            let amount = parse_money(&amount, "purchase amount")?;
            let month: Month = month
                .parse()
                .map_err(|e: String| FincastError::Validation(e))?;
            Some(PlannedPurchase { amount, month })
        }
        _ => None,
    };

    let report = ProjectionReport::generate(ScenarioParams {
        monthly_income,
        monthly_expenses,
        annual_return_percent: args.return_rate,
        purchase,
    });

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FincastError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Projection exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}

pub(crate) fn parse_money(value: &str, what: &str) -> FincastResult<Money> {
    Money::parse(value)
        .map_err(|_| FincastError::Validation(format!("Invalid {} amount: '{}'", what, value)))
}
