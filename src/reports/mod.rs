//! Reports module for fincast
//!
//! Each report wraps one core computation with terminal rendering and CSV
//! export.

pub mod hindsight;
pub mod projection;
pub mod spending;

pub use hindsight::HindsightReport;
pub use projection::ProjectionReport;
pub use spending::SpendingReport;
