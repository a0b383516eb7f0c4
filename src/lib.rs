//! Formtrack - form component sync status reporter
//!
//! Reports which form components of the application under migration
//! have database sync wired up, which still need it, and the overall
//! progress. The component lists are compiled in and curated by hand.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod registry;
pub mod report;

// Re-export commonly used types
pub use cli::render_report;
pub use report::{ReportSummary, SyncReport};
