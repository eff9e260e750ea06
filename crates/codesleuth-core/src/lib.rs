/// CodeSleuth Core: scanning, counting, and the result data model.
///
/// This crate contains all business logic with zero console dependencies.
/// It is designed to be reusable across different front ends (CLI, TUI,
/// editor integrations).
///
/// # Modules
///
/// - [`model`]: per-file records and the aggregate scan summary.
/// - [`classify`]: header/source extension rules.
/// - [`count`]: per-file line and blank-line counting.
/// - [`scanner`]: background tree walk with progress streaming and
///   lifecycle control.
/// - [`error`]: errors that can refuse a scan.
pub mod classify;
pub mod count;
pub mod error;
pub mod model;
pub mod scanner;
