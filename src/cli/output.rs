/// Output writing: result lines to stdout, errors and debug timings to stderr.
use std::io::{self, Write};

use crate::cut::CutError;

/// Output context passed to the command.
pub struct OutputCtx {
    /// When true, print phase timings and counts to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Print a `[debug]` line to stderr when `--debug` is set.
    pub fn note(&self, message: &str) {
        if self.debug {
            eprintln!("[debug] {message}");
        }
    }
}

/// Write each line followed by `\n`, then flush.
///
/// # Errors
///
/// Propagates any write or flush error from `out`.
pub fn write_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()
}

/// Write cut results to a buffered, locked stdout.
///
/// A closed pipe on the reading side ends output quietly.
///
/// # Errors
///
/// Returns `CutError::Output` for any other write failure.
pub fn write_stdout<S: AsRef<str>>(lines: &[S]) -> Result<(), CutError> {
    let stdout = io::stdout();
    emit(&mut io::BufWriter::new(stdout.lock()), lines)
}

/// Write cut results to `out`, treating a broken pipe as a normal end.
///
/// # Errors
///
/// Returns `CutError::Output` for any write failure other than `BrokenPipe`.
pub fn emit<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> Result<(), CutError> {
    match write_lines(out, lines) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(CutError::Output { source: e }),
        _ => Ok(()),
    }
}

// --- Error output ---

/// Write an error to stderr.
///
/// Configuration errors get an `Error: ` prefix; I/O errors carry their own
/// leading context.
pub fn write_error(err: &CutError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if err.is_config() {
        let _ = writeln!(out, "Error: {err}");
    } else {
        let _ = writeln!(out, "{err}");
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines_newline_terminated() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["1,3", "4,6"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,3\n4,6\n");
    }

    #[test]
    fn test_write_lines_nothing() {
        let mut buf = Vec::new();
        let empty: [&str; 0] = [];
        write_lines(&mut buf, &empty).unwrap();
        assert!(buf.is_empty());
    }

    /// A writer whose every write fails with `kind`.
    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(self.0))
        }
    }

    #[test]
    fn test_emit_broken_pipe_is_quiet() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(emit(&mut out, &["a"]).is_ok());
    }

    #[test]
    fn test_emit_other_write_error_is_output_error() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = emit(&mut out, &["a"]).unwrap_err();
        match &err {
            CutError::Output { source } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_emit_success() {
        let mut buf = Vec::new();
        emit(&mut buf, &["x"]).unwrap();
        assert_eq!(buf, b"x\n");
    }

    #[test]
    fn test_timer_inactive_without_debug() {
        let ctx = OutputCtx::new(false);
        let t = ctx.timer("noop");
        assert!(!t.active);
        assert_eq!(t.label, "noop");
    }
}
