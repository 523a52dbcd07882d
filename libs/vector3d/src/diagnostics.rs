//! Diagnostic channel for rejected calls.
//!
//! Rejections are written to stderr as a single free-form line. Nothing here
//! panics or exits; the caller still receives the error through its return
//! channel.

use std::io::{self, Write};

use crate::error::VectorError;

/// Prefix attached to every diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "vector3d";

/// Formats the diagnostic line for `error`.
///
/// # Examples
/// ```
/// use vector3d::{diagnostics, VectorError};
/// let line = diagnostics::format(&VectorError::invalid_argument("dot", "first"));
/// assert_eq!(line, "vector3d: dot: first operand is absent");
/// ```
pub fn format(error: &VectorError) -> String {
    format!("{DIAGNOSTIC_PREFIX}: {error}")
}

/// Writes one diagnostic line for `error` to `out` and hands the error back.
///
/// Write failures are ignored.
///
/// # Examples
/// ```
/// use vector3d::{diagnostics, VectorError};
/// let mut buf = Vec::new();
/// diagnostics::report_to(&mut buf, VectorError::invalid_argument("sum", "output"));
/// assert_eq!(buf, b"vector3d: sum: output operand is absent\n");
/// ```
pub fn report_to(out: &mut impl Write, error: VectorError) -> VectorError {
    let _ = writeln!(out, "{}", format(&error));
    error
}

/// Writes `error` to stderr and hands it back for propagation.
pub fn report(error: VectorError) -> VectorError {
    report_to(&mut io::stderr().lock(), error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_returns_the_same_error() {
        let err = VectorError::invalid_argument("set_x", "vector");
        assert_eq!(report(err), err);
    }

    #[test]
    fn report_to_writes_a_single_line() {
        let mut buf = Vec::new();
        let err = VectorError::invalid_argument("get_z", "vector");
        assert_eq!(report_to(&mut buf, err), err);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text, "vector3d: get_z: vector operand is absent\n");
    }

    #[test]
    fn report_to_ignores_write_failures() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = VectorError::invalid_argument("dot", "second");
        assert_eq!(report_to(&mut Broken, err), err);
    }

    #[test]
    fn format_is_prefixed() {
        let line = format(&VectorError::invalid_argument("sum", "output"));
        assert!(line.starts_with("vector3d: "));
        assert!(line.ends_with("sum: output operand is absent"));
    }
}
