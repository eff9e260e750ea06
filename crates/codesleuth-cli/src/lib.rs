/// CodeSleuth CLI: the console front end.
///
/// This crate contains all console I/O. Business logic lives in
/// `codesleuth-core`.
pub mod app;
pub mod args;

pub use app::run;
