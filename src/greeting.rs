//! The greeting line and how it is written.

use std::io::{self, Write};

/// Text printed on every invocation
pub const GREETING: &str = "Hello World";

/// Host line separator appended after the greeting
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Host line separator appended after the greeting
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// The full line, separator included
pub fn line() -> String {
    format!("{}{}", GREETING, LINE_SEPARATOR)
}

/// Write the greeting line to `out` in one write and flush it.
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(line().as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_exact_bytes() {
        let mut out = Vec::new();
        write_greeting(&mut out).unwrap();
        assert_eq!(out, format!("Hello World{}", LINE_SEPARATOR).into_bytes());
    }

    #[test]
    fn test_no_extra_characters() {
        let mut out = Vec::new();
        write_greeting(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end_matches(LINE_SEPARATOR), GREETING);
    }

    #[test]
    fn test_closed_sink_propagates() {
        let err = write_greeting(&mut ClosedSink).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
