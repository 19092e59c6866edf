//! CLI command for goal progress

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_bar;
use crate::error::{FincastError, FincastResult};
use crate::models::Goal;
use crate::services::goals;

use super::project::parse_money;

/// Arguments for the `goal` command
#[derive(Args, Debug)]
pub struct GoalArgs {
    /// Goal name
    #[arg(short, long)]
    pub name: String,

    /// Target amount
    #[arg(short, long)]
    pub target: String,

    /// Amount saved so far
    #[arg(short, long, default_value = "0")]
    pub saved: String,

    /// Target date (YYYY-MM-DD)
    #[arg(short, long)]
    pub by: String,

    /// Grouping label
    #[arg(short, long, default_value = "Savings")]
    pub category: String,
}

/// Handle the goal command
pub fn handle_goal_command(args: GoalArgs) -> FincastResult<()> {
    let target_amount = parse_money(&args.target, "target")?;
    let current_amount = parse_money(&args.saved, "saved")?;
    let target_date = NaiveDate::parse_from_str(&args.by, "%Y-%m-%d").map_err(|_| {
        FincastError::Validation(format!(
            "Invalid target date: '{}'. Use YYYY-MM-DD",
            args.by
        ))
    })?;

    let goal = Goal::new(
        args.name,
        target_amount,
        current_amount,
        target_date,
        args.category,
    );
    let today = chrono::Local::now().date_naive();

    let progress = goals::progress_percent(goal.current_amount, goal.target_amount);
    let needed = goals::monthly_contribution_needed(&goal, today);

    println!("{} ({})", goal.name, goal.category);
    println!("{}", "=".repeat(50));
    println!(
        "Progress:  {:>3}%  {}",
        progress,
        format_bar(progress as f64, 100.0, 20)
    );
    println!("Saved:     {} of {}", goal.current_amount, goal.target_amount);
    println!("Remaining: {}", goal.remaining());
    println!("Deadline:  {} ({})", goal.target_date, goals::time_left(goal.target_date, today));
    if !needed.is_zero() {
        println!("Needed:    {} per month to stay on track", needed);
    }

    Ok(())
}
