//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FincastPaths;
pub use settings::Settings;
