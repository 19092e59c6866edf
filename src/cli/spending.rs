//! CLI command for spending analysis

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::error::{FincastError, FincastResult};
use crate::reports::SpendingReport;
use crate::services::ingest;

/// Arguments for the `spending` command
#[derive(Args, Debug)]
pub struct SpendingArgs {
    /// Path to a CSV statement with Category and Amount columns
    pub file: PathBuf,

    /// Show top N categories only
    #[arg(long)]
    pub top: Option<usize>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the spending command
pub fn handle_spending_command(args: SpendingArgs) -> FincastResult<()> {
    let records = ingest::read_records_from_path(&args.file)?;
    let report = SpendingReport::generate(&records, args.top);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FincastError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Spending report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal());
    }

    Ok(())
}
