//! CLI command for the hindsight analysis

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{FincastError, FincastResult};
use crate::reports::HindsightReport;

use super::project::parse_money;

/// Arguments for the `hindsight` command
#[derive(Args, Debug)]
pub struct HindsightArgs {
    /// The past lump sum to analyze (e.g. "35000")
    pub amount: String,

    /// Annual return as a fraction (e.g. 0.07); defaults to the configured rate
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the hindsight command
pub fn handle_hindsight_command(settings: &Settings, args: HindsightArgs) -> FincastResult<()> {
    let amount = parse_money(&args.amount, "lump sum")?;
    let rate = args.rate.unwrap_or(settings.default_annual_return);
    let today = chrono::Local::now().date_naive();

    let report = HindsightReport::generate(amount, rate, today);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FincastError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Hindsight analysis exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}
