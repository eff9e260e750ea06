/// Running totals for one scan, shared between the walker thread and
/// snapshot readers.
///
/// All five counters and the frozen elapsed time live under a single
/// `parking_lot::Mutex`, so a snapshot can never observe a torn update
/// where a file is counted in `files` but its lines are missing from
/// `lines`. The critical sections are a handful of integer additions, far
/// too short to contend.
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::model::{FileKind, FileStats, ScanSummary};

/// Shared aggregate state of a scan.
pub struct Totals {
    started: Instant,
    inner: Mutex<TotalsInner>,
}

#[derive(Default)]
struct TotalsInner {
    files: u64,
    lines: u64,
    blank_lines: u64,
    header_files: u64,
    source_files: u64,
    /// Set exactly once when the walk stops; later reads reuse it.
    elapsed: Option<Duration>,
}

impl TotalsInner {
    fn to_summary(&self, elapsed: Duration) -> ScanSummary {
        ScanSummary {
            files: self.files,
            lines: self.lines,
            blank_lines: self.blank_lines,
            header_files: self.header_files,
            source_files: self.source_files,
            elapsed,
        }
    }
}

impl Totals {
    /// Fresh totals; the scan clock starts now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            inner: Mutex::new(TotalsInner::default()),
        }
    }

    /// Fold one counted file into the totals.
    pub(crate) fn fold(&self, stats: &FileStats) {
        let mut inner = self.inner.lock();
        inner.files += 1;
        inner.lines += stats.lines;
        inner.blank_lines += stats.blank_lines;
        match stats.kind {
            FileKind::Header => inner.header_files += 1,
            FileKind::Source => inner.source_files += 1,
        }
    }

    /// Consistent point-in-time summary.
    ///
    /// While the scan runs, `elapsed` is the time since start; after
    /// [`finish`](Self::finish) it is the frozen final value.
    pub fn snapshot(&self) -> ScanSummary {
        let inner = self.inner.lock();
        let elapsed = inner.elapsed.unwrap_or_else(|| self.started.elapsed());
        inner.to_summary(elapsed)
    }

    /// Freeze the elapsed time and return the final summary.
    ///
    /// Idempotent: the first call stops the clock, repeat calls return the
    /// same summary.
    pub(crate) fn finish(&self) -> ScanSummary {
        let mut inner = self.inner.lock();
        let elapsed = *inner.elapsed.get_or_insert_with(|| self.started.elapsed());
        inner.to_summary(elapsed)
    }
}

impl Default for Totals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stats(kind: FileKind, lines: u64, blank_lines: u64) -> FileStats {
        FileStats {
            path: PathBuf::from("x"),
            kind,
            lines,
            blank_lines,
        }
    }

    #[test]
    fn fold_accumulates_per_kind() {
        let totals = Totals::new();
        totals.fold(&stats(FileKind::Header, 3, 1));
        totals.fold(&stats(FileKind::Source, 10, 0));
        totals.fold(&stats(FileKind::Source, 0, 0));

        let summary = totals.snapshot();
        assert_eq!(summary.files, 3);
        assert_eq!(summary.lines, 13);
        assert_eq!(summary.blank_lines, 1);
        assert_eq!(summary.header_files, 1);
        assert_eq!(summary.source_files, 2);
        assert!(summary.is_consistent());
    }

    #[test]
    fn empty_totals_snapshot_is_zeroed() {
        let summary = Totals::new().snapshot();
        assert_eq!(summary.files, 0);
        assert_eq!(summary.lines, 0);
        assert!(summary.is_consistent());
    }

    /// `finish` freezes the clock exactly once; repeat calls and later
    /// snapshots must agree to the nanosecond.
    #[test]
    fn finish_is_idempotent() {
        let totals = Totals::new();
        totals.fold(&stats(FileKind::Source, 5, 2));

        let first = totals.finish();
        std::thread::sleep(Duration::from_millis(5));
        let second = totals.finish();
        let snap = totals.snapshot();

        assert_eq!(first, second);
        assert_eq!(first, snap);
    }

    /// Snapshots taken while the scan is live report a growing elapsed.
    #[test]
    fn live_snapshot_elapsed_grows() {
        let totals = Totals::new();
        let a = totals.snapshot().elapsed;
        std::thread::sleep(Duration::from_millis(5));
        let b = totals.snapshot().elapsed;
        assert!(b >= a);
    }
}
