/// Depth-first directory walker, the producer half of a scan.
///
/// One thread, explicit recursion, children visited in lexicographic byte
/// order of their names, so the message stream and the totals are
/// deterministic for a given tree.
///
/// # Failure policy
///
/// Only the scan root is load-bearing. An unreadable subdirectory is
/// reported as a `Warning` and skipped; an unreadable file that matched an
/// extension set is still counted, with zero lines. Nothing mid-walk aborts
/// the scan.
use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::classify::ClassifyRules;
use crate::count::{count_lines, LineCount};
use crate::model::FileStats;
use crate::scanner::aggregate::Totals;
use crate::scanner::progress::{ProgressSender, ScanMessage};

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkStatus {
    Completed,
    Cancelled,
}

/// Borrowed pieces every recursion level needs.
pub(crate) struct WalkContext<'a> {
    pub rules: &'a ClassifyRules,
    pub totals: &'a Totals,
    pub messages: &'a ProgressSender,
    pub cancel: &'a AtomicBool,
}

/// Walk `dir` and everything under it.
///
/// Cancellation is polled on entry to each directory and before each entry,
/// never mid-file: a cancel that lands while a file is being counted takes
/// effect at the next entry boundary.
pub(crate) fn visit_dir(dir: &Path, ctx: &WalkContext<'_>) -> WalkStatus {
    if ctx.cancel.load(Ordering::Relaxed) {
        return WalkStatus::Cancelled;
    }

    let entries = match sorted_entries(dir, ctx.messages) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("skipping unreadable directory {}: {err}", dir.display());
            ctx.messages.push(ScanMessage::Warning {
                path: dir.to_path_buf(),
                message: err.to_string(),
            });
            return WalkStatus::Completed;
        }
    };

    for entry in entries {
        if ctx.cancel.load(Ordering::Relaxed) {
            return WalkStatus::Cancelled;
        }

        let path = entry.path();
        // `DirEntry::file_type` does not follow symlinks, so a symlinked
        // directory is a leaf here and cycles are impossible.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            if visit_dir(&path, ctx) == WalkStatus::Cancelled {
                return WalkStatus::Cancelled;
            }
            continue;
        }

        let Some(kind) = ctx.rules.classify(&path) else {
            continue;
        };

        // A classified file always produces a record: an unreadable one
        // degrades to a zero count instead of vanishing from the totals.
        let count = match count_lines(&path) {
            Ok(count) => count,
            Err(err) => {
                debug!("could not count {}: {err}", path.display());
                LineCount::default()
            }
        };

        let stats = FileStats {
            path,
            kind,
            lines: count.lines,
            blank_lines: count.blank_lines,
        };

        // Fold before push: a drained message never runs ahead of what a
        // totals snapshot reports.
        ctx.totals.fold(&stats);
        ctx.messages.push(ScanMessage::Counted(stats));
    }

    WalkStatus::Completed
}

/// List `dir` sorted by name.
///
/// A per-entry readdir error (rare, mid-stream) costs that entry a warning,
/// not the directory.
fn sorted_entries(dir: &Path, messages: &ProgressSender) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<DirEntry> = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                messages.push(ScanMessage::Warning {
                    path: dir.to_path_buf(),
                    message: err.to_string(),
                });
            }
        }
    }
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
