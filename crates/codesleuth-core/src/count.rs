/// Line counting for a single file.
///
/// Counting is byte-oriented with one reused buffer per file, so no per-line
/// heap allocation and no UTF-8 validation on the hot path. A line is any
/// run of bytes up to and including a `\n` terminator, plus a final
/// unterminated run if the file does not end in `\n`.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Result of counting one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineCount {
    /// Total lines, blank ones included.
    pub lines: u64,
    /// Lines that are empty once the terminator is stripped.
    pub blank_lines: u64,
}

/// Count lines and blank lines in `path`.
///
/// A line is blank only when nothing remains after stripping `\n` and a
/// preceding `\r`; whitespace-only lines are not blank. A trailing `\n`
/// closes the last line rather than opening an empty one, and a missing
/// trailing `\n` still counts the final partial line.
pub fn count_lines(path: &Path) -> io::Result<LineCount> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    let mut count = LineCount::default();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        count.lines += 1;

        let mut content: &[u8] = &buf;
        if let Some(stripped) = content.strip_suffix(b"\n") {
            content = stripped;
        }
        if let Some(stripped) = content.strip_suffix(b"\r") {
            content = stripped;
        }
        if content.is_empty() {
            count.blank_lines += 1;
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Write `content` to a temp file and count it.
    fn count_str(content: &str) -> LineCount {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("input.cpp");
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        count_lines(&path).unwrap()
    }

    #[test]
    fn empty_file_counts_zero() {
        assert_eq!(
            count_str(""),
            LineCount {
                lines: 0,
                blank_lines: 0
            }
        );
    }

    #[test]
    fn counts_lines_and_blanks() {
        assert_eq!(
            count_str("int main() {\n\n    return 0;\n}\n"),
            LineCount {
                lines: 4,
                blank_lines: 1
            }
        );
    }

    /// A trailing newline closes the last line; it must not add a phantom
    /// blank line after it.
    #[test]
    fn trailing_newline_adds_no_phantom_line() {
        assert_eq!(
            count_str("one\ntwo\n"),
            LineCount {
                lines: 2,
                blank_lines: 0
            }
        );
    }

    /// A final line without a terminator still counts.
    #[test]
    fn unterminated_last_line_counts() {
        assert_eq!(
            count_str("one\ntwo"),
            LineCount {
                lines: 2,
                blank_lines: 0
            }
        );
    }

    #[test]
    fn lone_newline_is_one_blank_line() {
        assert_eq!(
            count_str("\n"),
            LineCount {
                lines: 1,
                blank_lines: 1
            }
        );
    }

    /// CRLF terminators strip to the same blank/non-blank decision as LF.
    #[test]
    fn crlf_lines_are_handled() {
        assert_eq!(
            count_str("alpha\r\n\r\nbeta\r\n"),
            LineCount {
                lines: 3,
                blank_lines: 1
            }
        );
    }

    /// Whitespace-only lines are not blank; only truly empty lines are.
    #[test]
    fn whitespace_only_line_is_not_blank() {
        assert_eq!(
            count_str("   \n\t\n\n"),
            LineCount {
                lines: 3,
                blank_lines: 1
            }
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        assert!(count_lines(&tmp.path().join("absent.cpp")).is_err());
    }

    /// Non-UTF-8 content is fine; counting is byte-oriented.
    #[test]
    fn non_utf8_bytes_are_counted() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("latin1.cpp");
        let mut f = File::create(&path).unwrap();
        f.write_all(&[0xFF, 0xFE, b'\n', b'\n']).unwrap();
        assert_eq!(
            count_lines(&path).unwrap(),
            LineCount {
                lines: 2,
                blank_lines: 1
            }
        );
    }
}
