//! Computation services for fincast
//!
//! The business logic layer: pure, synchronous functions that take plain
//! inputs and return plain data structures. Each call is independent and
//! idempotent — callers own the returned values and discard them on the next
//! recompute.

pub mod goals;
pub mod hindsight;
pub mod ingest;
pub mod projection;
pub mod spending;

pub use hindsight::DEFAULT_ANNUAL_RETURN;
pub use projection::{project, PlannedPurchase, ScenarioParams};
pub use spending::{aggregate, SpendingAnalysis};
