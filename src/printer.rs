use std::io::{self, Write};

use crate::loader::FileContent;

const HEADER: &str = "File contents:";
const NO_CONTENT: &str = "No content to display.";

/// Writes the contents (or the no-content notice) to stdout.
///
/// Output errors are not checked.
pub fn print_contents(content: Option<&FileContent>) {
    let stdout = io::stdout();
    let _ = write_contents(&mut stdout.lock(), content);
}

fn write_contents(out: &mut impl Write, content: Option<&FileContent>) -> io::Result<()> {
    match content {
        Some(content) => {
            writeln!(out, "{HEADER}")?;
            out.write_all(content.as_bytes())?;
            writeln!(out)?;
        }
        None => writeln!(out, "{NO_CONTENT}")?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    fn content_of(bytes: &[u8]) -> FileContent {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture");
        std::fs::write(&path, bytes).unwrap();
        load(&path).unwrap()
    }

    #[test]
    fn test_prints_header_and_raw_bytes() {
        let content = content_of(b"hello\n");
        let mut out = Vec::new();
        write_contents(&mut out, Some(&content)).unwrap();
        assert_eq!(out, b"File contents:\nhello\n\n");
    }

    #[test]
    fn test_empty_content_prints_header_and_blank_line() {
        let content = content_of(b"");
        let mut out = Vec::new();
        write_contents(&mut out, Some(&content)).unwrap();
        assert_eq!(out, b"File contents:\n\n");
    }

    #[test]
    fn test_absent_content_prints_notice() {
        let mut out = Vec::new();
        write_contents(&mut out, None).unwrap();
        assert_eq!(out, b"No content to display.\n");
    }

    #[test]
    fn test_sentinel_is_not_printed() {
        let content = content_of(b"abc");
        let mut out = Vec::new();
        write_contents(&mut out, Some(&content)).unwrap();
        assert!(!out.contains(&crate::loader::SENTINEL));
    }
}
