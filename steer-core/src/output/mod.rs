//! Terminal output with swappable sinks.
//!
//! [`Printer`] is the single write path for user-facing text. Styling is
//! resolved through a [`Theme`]; the sink defaults to stdout and can be
//! swapped for an in-memory buffer when tests need to assert on output.

mod theme;

pub use theme::{TextStyle, Theme};

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Styled text writer shared by the dispatcher and controllers.
pub struct Printer {
    theme: Theme,
    sink: RefCell<Box<dyn Write>>,
}

impl Printer {
    /// Printer writing to stdout with the given theme.
    pub fn stdout(theme: Theme) -> Self {
        Printer::with_sink(theme, Box::new(io::stdout()))
    }

    /// Printer writing to an arbitrary sink.
    pub fn with_sink(theme: Theme, sink: Box<dyn Write>) -> Self {
        Printer {
            theme,
            sink: RefCell::new(sink),
        }
    }

    /// Unstyled printer that records everything written, paired with a
    /// handle for reading it back.
    pub fn capture() -> (Self, CapturedOutput) {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        let captured = CapturedOutput {
            buffer: Rc::clone(&buffer),
        };
        (
            Printer::with_sink(Theme::plain(), Box::new(CaptureSink { buffer })),
            captured,
        )
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolves a style tag against the theme without writing.
    pub fn style(&self, text: &str, tag: &str) -> String {
        self.theme.apply(tag, text)
    }

    /// Writes a styled segment without a trailing newline.
    pub fn out(&self, text: &str, tag: &str) {
        self.write_raw(&self.style(text, tag));
    }

    pub fn newline(&self) {
        self.write_raw("\n");
    }

    /// Run of spaces used for column layouts.
    pub fn spaces(&self, count: usize) -> String {
        " ".repeat(count)
    }

    /// Default-styled line with trailing newline.
    pub fn line(&self, text: &str) {
        self.out(text, "default");
        self.newline();
    }

    /// Newline-padded block in the tagged style.
    pub fn display(&self, text: &str, tag: &str) {
        self.newline();
        self.out(text, tag);
        self.newline();
    }

    pub fn error(&self, text: &str) {
        self.display(text, "error");
    }

    pub fn success(&self, text: &str) {
        self.display(text, "success");
    }

    pub fn info(&self, text: &str) {
        self.display(text, "info");
    }

    fn write_raw(&self, text: &str) {
        let mut sink = self.sink.borrow_mut();
        let _ = sink.write_all(text.as_bytes());
        let _ = sink.flush();
    }
}

struct CaptureSink {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Read handle onto text written through [`Printer::capture`].
#[derive(Clone)]
pub struct CapturedOutput {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}
