/// Per-file scan record: which bucket a file fell into and what was counted
/// inside it.
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The bucket a counted file belongs to.
///
/// Files that match neither extension set never produce a record at all, so
/// there is no `Other` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    Header,
    Source,
}

impl FileKind {
    /// Human-readable label for display and logging.
    pub fn label(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Source => "source",
        }
    }
}

/// Line counts for one counted file.
///
/// `blank_lines` is always <= `lines`; a blank line is still a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Full path of the file, as produced by the walk.
    pub path: PathBuf,
    /// Header or source classification.
    pub kind: FileKind,
    /// Total number of lines, including blank ones.
    pub lines: u64,
    /// Lines that are empty after stripping the line terminator.
    pub blank_lines: u64,
}

impl fmt::Display for FileStats {
    /// Renders the per-file status line the console prints while a scan is
    /// running: `src/main.cpp: 120 lines, 14 empty lines`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} lines, {} empty lines",
            self.path.display(),
            self.lines,
            self.blank_lines
        )
    }
}
