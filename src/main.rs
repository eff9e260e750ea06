//! CodeSleuth: a progressive source line counter.
//!
//! Thin binary entry point. All logic lives in the `codesleuth-core`
//! and `codesleuth-cli` crates.

fn main() -> anyhow::Result<()> {
    // Initialise structured logging on stderr; stdout carries scan output.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    codesleuth_cli::run()
}
