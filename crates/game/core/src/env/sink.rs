//! Narrative output for battle events.
//!
//! The core never prints. It hands finished lines to a [`TextSink`]; how they
//! are shown (colors, panels, log files) is up to the host.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives narrative lines and non-fatal error reports.
pub trait TextSink {
    /// A regular narrative line ("Rook takes 12 damage!").
    fn emit(&mut self, line: &str);

    /// A rejected operation ("Status already exists!").
    fn emit_error(&mut self, line: &str);
}

/// Forwards every line to `tracing` on the `battle` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TextSink for TracingSink {
    fn emit(&mut self, line: &str) {
        tracing::info!(target: "battle", "{}", line);
    }

    fn emit_error(&mut self, line: &str) {
        tracing::warn!(target: "battle", "{}", line);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TextSink for NullSink {
    fn emit(&mut self, _line: &str) {}

    fn emit_error(&mut self, _line: &str) {}
}

/// A line captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkLine {
    Narrative(String),
    Error(String),
}

impl SinkLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Narrative(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Captures lines in a buffer shared between clones.
///
/// Hand one clone to the [`Env`](super::Env) and keep another to inspect what
/// was emitted.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<SinkLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in emission order.
    pub fn lines(&self) -> Vec<SinkLine> {
        self.lines.borrow().clone()
    }

    /// Narrative lines only.
    pub fn narrative(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| !line.is_error())
            .map(|line| line.text().to_owned())
            .collect()
    }

    /// Error lines only.
    pub fn errors(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.is_error())
            .map(|line| line.text().to_owned())
            .collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl TextSink for RecordingSink {
    fn emit(&mut self, line: &str) {
        self.lines
            .borrow_mut()
            .push(SinkLine::Narrative(line.to_owned()));
    }

    fn emit_error(&mut self, line: &str) {
        self.lines.borrow_mut().push(SinkLine::Error(line.to_owned()));
    }
}
