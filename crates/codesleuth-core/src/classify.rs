/// File classification based on file extensions.
///
/// Splits files into two buckets, headers and sources, using configurable
/// extension sets. Anything that matches neither set is invisible to the
/// scan: not counted, not reported.
use std::path::Path;

use compact_str::CompactString;

use crate::model::FileKind;

/// Header extensions counted when no override is given.
pub const DEFAULT_HEADER_EXTS: &[&str] = &["h", "hpp", "hxx"];

/// Source extensions counted when no override is given.
pub const DEFAULT_SOURCE_EXTS: &[&str] = &["cc", "cpp", "cxx", "c++"];

/// Label shown in the final report when no override is given.
pub const DEFAULT_LABEL: &str = "C++";

/// Which file extensions count as headers and which as sources.
///
/// Matching is exact and case-sensitive: `.H` does not match `h`. Callers
/// that want both casings list both. The sets are expected to be disjoint;
/// if an extension appears in both, the header set wins because it is
/// checked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyRules {
    header_exts: Vec<CompactString>,
    source_exts: Vec<CompactString>,
    label: CompactString,
}

impl ClassifyRules {
    /// Build rules from explicit extension lists.
    ///
    /// A leading dot is stripped from each entry, so "h" and ".h" are
    /// equivalent inputs.
    pub fn new<H, S>(label: &str, header_exts: H, source_exts: S) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        fn normalise<I>(exts: I) -> Vec<CompactString>
        where
            I: IntoIterator,
            I::Item: AsRef<str>,
        {
            exts.into_iter()
                .map(|e| CompactString::new(e.as_ref().trim_start_matches('.')))
                .filter(|e| !e.is_empty())
                .collect()
        }

        Self {
            header_exts: normalise(header_exts),
            source_exts: normalise(source_exts),
            label: CompactString::new(label),
        }
    }

    /// The default C++ rules: `.h .hpp .hxx` headers, `.cc .cpp .cxx .c++`
    /// sources.
    pub fn cpp() -> Self {
        Self::new(DEFAULT_LABEL, DEFAULT_HEADER_EXTS, DEFAULT_SOURCE_EXTS)
    }

    /// Language label for the final report.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Classify a path by its extension.
    ///
    /// Classification looks at the name only; the walker is responsible for
    /// passing file entries, not directories. Paths without an extension
    /// (including dotfiles like `.h`, whose whole name is the stem) return
    /// `None`.
    pub fn classify(&self, path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?;
        if self.header_exts.iter().any(|e| e.as_str() == ext) {
            return Some(FileKind::Header);
        }
        if self.source_exts.iter().any(|e| e.as_str() == ext) {
            return Some(FileKind::Source);
        }
        None
    }
}

impl Default for ClassifyRules {
    fn default() -> Self {
        Self::cpp()
    }
}
