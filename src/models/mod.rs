//! Core data models for fincast
//!
//! This module contains the data structures the computations operate on:
//! money amounts, calendar months, timeline points, spending records, and
//! savings goals. Every value here is ephemeral — owned by the computation
//! that produced it and recomputed in full on each invocation.

pub mod goal;
pub mod money;
pub mod month;
pub mod spending;
pub mod timeline;

pub use goal::Goal;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use spending::{CategoryTotal, SpendingRecord, COLOR_PALETTE};
pub use timeline::{
    baseline_series, baseline_value, AlternativePoint, TimelinePoint, BASELINE_YEAR,
};
