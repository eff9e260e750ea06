/// Data model for scan results.
///
/// Re-exports the per-file record and the aggregate summary.
pub mod file_stats;
pub mod summary;

pub use file_stats::{FileKind, FileStats};
pub use summary::ScanSummary;
