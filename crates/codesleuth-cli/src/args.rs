/// Command-line arguments.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use codesleuth_core::classify::{
    ClassifyRules, DEFAULT_HEADER_EXTS, DEFAULT_LABEL, DEFAULT_SOURCE_EXTS,
};
use codesleuth_core::scanner::progress::DEFAULT_DRAIN_BATCH;

/// Milliseconds between display refreshes.
pub const DEFAULT_TICK_MS: u64 = 30;

#[derive(Debug, Parser)]
#[command(
    name = "codesleuth",
    version,
    about = "Count header and source files, lines, and blank lines under a directory",
    long_about = "codesleuth walks a directory tree, counts lines in every header and \
                  source file it recognises, and streams per-file counts to the console \
                  while the scan runs, ending with a summary report."
)]
pub struct Args {
    /// Directory to scan
    pub path: PathBuf,

    /// Milliseconds between display refreshes
    #[arg(
        long = "tick-ms",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Maximum status lines printed per refresh
    #[arg(
        long,
        default_value_t = DEFAULT_DRAIN_BATCH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub batch: usize,

    /// Comma-separated header extensions (default: h,hpp,hxx)
    #[arg(long = "header-ext", value_delimiter = ',')]
    pub header_ext: Vec<String>,

    /// Comma-separated source extensions (default: cc,cpp,cxx,c++)
    #[arg(long = "source-ext", value_delimiter = ',')]
    pub source_ext: Vec<String>,

    /// Language label used in the summary report
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Streamed per-file status lines plus the two-line report
    #[default]
    Text,
    /// The final summary as one JSON object on stdout
    Json,
}

impl Args {
    /// Classification rules from the extension flags, falling back to the
    /// C++ defaults for any list that was not given.
    pub fn rules(&self) -> ClassifyRules {
        let headers: Vec<&str> = if self.header_ext.is_empty() {
            DEFAULT_HEADER_EXTS.to_vec()
        } else {
            self.header_ext.iter().map(String::as_str).collect()
        };
        let sources: Vec<&str> = if self.source_ext.is_empty() {
            DEFAULT_SOURCE_EXTS.to_vec()
        } else {
            self.source_ext.iter().map(String::as_str).collect()
        };
        ClassifyRules::new(&self.label, headers, sources)
    }
}
