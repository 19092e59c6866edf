use anyhow::Result;
use clap::{Parser, Subcommand};

use fincast::cli::{
    handle_goal_command, handle_hindsight_command, handle_project_command,
    handle_spending_command, GoalArgs, HindsightArgs, ProjectArgs, SpendingArgs,
};
use fincast::config::{paths::FincastPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "fincast",
    version,
    about = "Personal-finance projection and spending-analysis toolkit",
    long_about = "fincast projects your net worth under what-if scenarios, analyzes \
                  spending from bank statement CSVs, compares past purchases against \
                  investing the money instead, and tracks savings goal progress. \
                  All computations are in-memory one-shots; nothing is stored."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a 12-month net-worth scenario against the baseline
    #[command(alias = "simulate")]
    Project(ProjectArgs),

    /// Compare a past lump sum against having invested it
    #[command(alias = "whatif")]
    Hindsight(HindsightArgs),

    /// Analyze spending categories from a CSV statement
    Spending(SpendingArgs),

    /// Check progress toward a savings goal
    Goal(GoalArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FincastPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Project(args)) => {
            handle_project_command(args)?;
        }
        Some(Commands::Hindsight(args)) => {
            handle_hindsight_command(&settings, args)?;
        }
        Some(Commands::Spending(args)) => {
            handle_spending_command(args)?;
        }
        Some(Commands::Goal(args)) => {
            handle_goal_command(args)?;
        }
        Some(Commands::Config) => {
            println!("fincast Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Default annual return: {:.1}%",
                settings.default_annual_return * 100.0
            );
            println!("  Date format:           {}", settings.date_format);
        }
        None => {
            println!("fincast - Personal-finance projection and spending analysis");
            println!();
            println!("Run 'fincast --help' for usage information.");
        }
    }

    Ok(())
}
