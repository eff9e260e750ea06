/// Aggregate scan results: the five counters every scan maintains plus the
/// elapsed wall-clock time.
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Totals for one scan.
///
/// `files == header_files + source_files` and `blank_lines <= lines` hold at
/// every observable point, including mid-scan snapshots; see
/// [`is_consistent`](Self::is_consistent).
///
/// Serialized with `elapsed` flattened to whole milliseconds
/// (`"elapsed_ms"`), matching the unit the text report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Counted files of either kind.
    pub files: u64,
    /// Lines across all counted files, blank ones included.
    pub lines: u64,
    /// Blank lines across all counted files.
    pub blank_lines: u64,
    /// Files classified as headers.
    pub header_files: u64,
    /// Files classified as sources.
    pub source_files: u64,
    /// Wall-clock time from scan start to completion or cancellation.
    #[serde(rename = "elapsed_ms", with = "duration_ms")]
    pub elapsed: Duration,
}

impl ScanSummary {
    /// True when the cross-counter invariants hold.
    pub fn is_consistent(&self) -> bool {
        self.files == self.header_files + self.source_files && self.blank_lines <= self.lines
    }

    /// Render the final two-line report:
    ///
    /// ```text
    /// elapsed time: 128ms
    /// 3 C++ files, 13 lines, 1 empty lines, 1 header files, 2 source files
    /// ```
    ///
    /// `label` is the language name shown before "files" (default "C++").
    pub fn report(&self, label: &str) -> String {
        format!(
            "elapsed time: {}ms\n{} {} files, {} lines, {} empty lines, {} header files, {} source files",
            self.elapsed.as_millis(),
            self.files,
            label,
            self.lines,
            self.blank_lines,
            self.header_files,
            self.source_files
        )
    }

    /// Parse a string produced by [`report`](Self::report) back into a
    /// summary. Intended for tests and log scraping; returns `None` on any
    /// shape mismatch, wrong unit words included. Labels containing `", "`
    /// are not supported.
    pub fn parse_report(report: &str) -> Option<Self> {
        let mut report_lines = report.lines();
        let elapsed_ms: u64 = report_lines
            .next()?
            .strip_prefix("elapsed time: ")?
            .strip_suffix("ms")?
            .parse()
            .ok()?;

        // Each comma-separated part is a number followed by its unit words;
        // the first part's unit is "<label> files".
        let mut parts = report_lines.next()?.split(", ");
        let (files, label_unit) = parts.next()?.split_once(' ')?;
        if !label_unit.ends_with("files") {
            return None;
        }
        let files = files.parse().ok()?;

        let mut counted = |unit: &str| -> Option<u64> {
            let (number, rest) = parts.next()?.split_once(' ')?;
            if rest != unit {
                return None;
            }
            number.parse().ok()
        };
        let lines = counted("lines")?;
        let blank_lines = counted("empty lines")?;
        let header_files = counted("header files")?;
        let source_files = counted("source files")?;

        if parts.next().is_some() || report_lines.next().is_some() {
            return None;
        }

        Some(Self {
            files,
            lines,
            blank_lines,
            header_files,
            source_files,
            elapsed: Duration::from_millis(elapsed_ms),
        })
    }
}

/// Serde adapter storing a `Duration` as whole milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(elapsed: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u64(elapsed.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(de)?))
    }
}
