//! # Console Sink
//!
//! Every demonstration in this crate reports what it does by appending lines to a
//! [`Console`]. Production code writes to standard output through [`StdoutConsole`];
//! tests swap in a [`RecordingConsole`] and inspect the lines afterwards.
//!
//! ## When to use which
//!
//! | Console | Output | Use Case |
//! |---------|--------|----------|
//! | [`StdoutConsole`] | Process stdout | The demo binary |
//! | [`RecordingConsole`] | In-memory `Vec<String>` | Unit and integration tests |
//!
//! ```rust
//! use pattern_recipe::console::{Console, RecordingConsole};
//!
//! let mut console = RecordingConsole::new();
//! console.write_line("Hello");
//! assert_eq!(console.lines(), ["Hello"]);
//! ```

/// A line-oriented output sink.
///
/// Drivers take `&mut dyn Console`, so the same code can print to a terminal or
/// record into memory.
pub trait Console {
    /// Appends one line. The line must not contain a trailing newline.
    fn write_line(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every line in memory.
///
/// # Example
/// ```rust
/// use pattern_recipe::console::{Console, RecordingConsole};
///
/// let mut console = RecordingConsole::new();
/// console.write_line("first");
/// console.write_line("second");
///
/// assert_eq!(console.lines().len(), 2);
/// assert_eq!(console.into_lines(), vec!["first".to_string(), "second".to_string()]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingConsole {
    lines: Vec<String>,
}

impl RecordingConsole {
    /// Creates an empty recording console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Forgets every recorded line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for RecordingConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_console_keeps_insertion_order() {
        let mut console = RecordingConsole::new();
        assert!(console.is_empty());

        console.write_line("a");
        console.write_line("b");
        assert_eq!(console.lines(), ["a", "b"]);

        console.clear();
        assert!(console.is_empty());
    }

    #[test]
    fn recording_console_works_behind_trait_object() {
        let mut console = RecordingConsole::new();
        {
            let sink: &mut dyn Console = &mut console;
            sink.write_line("through dyn");
        }
        assert_eq!(console.lines(), ["through dyn"]);
    }
}
