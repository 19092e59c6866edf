//! fincast - Personal-finance projection and spending-analysis toolkit
//!
//! This library provides the computational core behind a personal-finance
//! dashboard: net-worth scenario projection, lump-sum hindsight analysis,
//! spending category aggregation with advisory observations, and goal
//! progress arithmetic. Every computation is a pure, synchronous function —
//! plain data in, plain data out, recomputed in full on each call. Nothing
//! is persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, timeline points, goals)
//! - `services`: The pure computations
//! - `reports`: Terminal rendering and CSV export per computation
//! - `display`: Shared terminal formatting helpers
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use fincast::models::Money;
//! use fincast::services::{project, ScenarioParams};
//!
//! let series = project(&ScenarioParams {
//!     monthly_income: Money::from_whole(5_000),
//!     monthly_expenses: Money::from_whole(3_000),
//!     annual_return_percent: 7.0,
//!     purchase: None,
//! });
//! assert_eq!(series.len(), 12);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{FincastError, FincastResult};
