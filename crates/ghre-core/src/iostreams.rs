//! Terminal output for progress notices and error reports.
//!
//! Commands write through [`IOStreams`] instead of `println!()` so that the
//! exact output of an export run can be captured and asserted in tests.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A boxed writer shared behind a mutex.
type SharedSink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writer that appends into a buffer shared with test code.
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captured output of an [`IOStreams::test_with_output`] instance.
#[derive(Debug, Clone)]
pub struct TestOutput {
    out_buf: Arc<Mutex<Vec<u8>>>,
    err_buf: Arc<Mutex<Vec<u8>>>,
}

impl TestOutput {
    /// Captured stdout.
    pub fn stdout(&self) -> String {
        Self::read(&self.out_buf)
    }

    /// Captured stderr.
    pub fn stderr(&self) -> String {
        Self::read(&self.err_buf)
    }

    fn read(buf: &Arc<Mutex<Vec<u8>>>) -> String {
        let buf = buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).to_string()
    }
}

/// Which stream a write goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Out,
    Err,
}

/// Stdout/stderr pair with TTY and color detection.
pub struct IOStreams {
    stdout_is_tty: bool,
    color_forced: Option<bool>,
    out: SharedSink,
    err: SharedSink,
}

impl std::fmt::Debug for IOStreams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IOStreams")
            .field("stdout_is_tty", &self.stdout_is_tty)
            .field("color_forced", &self.color_forced)
            .finish_non_exhaustive()
    }
}

impl IOStreams {
    /// Streams bound to the real terminal.
    ///
    /// `NO_COLOR` disables styling regardless of TTY state.
    pub fn system() -> Self {
        Self {
            stdout_is_tty: io::stdout().is_terminal(),
            color_forced: std::env::var_os("NO_COLOR").map(|_| false),
            out: Arc::new(Mutex::new(Box::new(io::stdout()))),
            err: Arc::new(Mutex::new(Box::new(io::stderr()))),
        }
    }

    /// Non-TTY, colorless streams whose output is captured in memory.
    pub fn test_with_output() -> (Self, TestOutput) {
        let out_buf = Arc::new(Mutex::new(Vec::new()));
        let err_buf = Arc::new(Mutex::new(Vec::new()));

        let ios = Self {
            stdout_is_tty: false,
            color_forced: Some(false),
            out: Arc::new(Mutex::new(Box::new(BufferWriter(out_buf.clone())))),
            err: Arc::new(Mutex::new(Box::new(BufferWriter(err_buf.clone())))),
        };

        (ios, TestOutput { out_buf, err_buf })
    }

    fn write_line(&self, stream: Stream, args: std::fmt::Arguments<'_>) {
        let sink = match stream {
            Stream::Out => &self.out,
            Stream::Err => &self.err,
        };
        let mut w = sink.lock().unwrap_or_else(PoisonError::into_inner);
        // Write failures (e.g. a closed pipe) are ignored.
        let _ = w.write_fmt(args);
        let _ = w.write_all(b"\n");
        let _ = w.flush();
    }

    /// Write formatted output to stdout with trailing newline.
    pub fn writeln_out(&self, args: std::fmt::Arguments<'_>) {
        self.write_line(Stream::Out, args);
    }

    /// Write formatted output to stderr with trailing newline.
    pub fn writeln_err(&self, args: std::fmt::Arguments<'_>) {
        self.write_line(Stream::Err, args);
    }

    fn color_enabled(&self) -> bool {
        self.color_forced.unwrap_or(self.stdout_is_tty)
    }

    /// Color scheme matching the current settings.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            enabled: self.color_enabled(),
        }
    }
}

/// Terminal styling that degrades to plain text when color is off.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn paint(&self, text: &str, style: console::Style) -> String {
        if self.enabled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Green.
    pub fn success(&self, text: &str) -> String {
        self.paint(text, console::Style::new().green())
    }

    /// Red.
    pub fn error(&self, text: &str) -> String {
        self.paint(text, console::Style::new().red())
    }

    /// Check mark shown next to a completed export.
    pub fn success_icon(&self) -> String {
        self.success("✓")
    }
}

/// Write to IOStreams stdout with newline, similar to `println!()`.
#[macro_export]
macro_rules! ios_println {
    ($ios:expr, $($arg:tt)*) => {
        $ios.writeln_out(format_args!($($arg)*))
    };
}

/// Write to IOStreams stderr with newline, similar to `eprintln!()`.
#[macro_export]
macro_rules! ios_eprintln {
    ($ios:expr, $($arg:tt)*) => {
        $ios.writeln_err(format_args!($($arg)*))
    };
}
