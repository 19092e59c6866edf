//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the computation services.

pub mod goal;
pub mod hindsight;
pub mod project;
pub mod spending;

pub use goal::{handle_goal_command, GoalArgs};
pub use hindsight::{handle_hindsight_command, HindsightArgs};
pub use project::{handle_project_command, ProjectArgs};
pub use spending::{handle_spending_command, SpendingArgs};
