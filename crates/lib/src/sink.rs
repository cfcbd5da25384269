//! Line-oriented output sink.
//!
//! Library code never writes to the terminal itself. Status lines and streamed build-tool output
//! go through an [`OutputSink`]; the CLI renders them with colors, tests record them.

use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// Category marker for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
  Info,
  Warning,
  Error,
  Success,
  /// Emphasized value inside ordinary text, such as the project name.
  Highlight,
}

pub trait OutputSink: Send + Sync {
  /// Append a plain line.
  fn line(&self, text: &str);

  /// Append a line tagged with a category.
  fn styled(&self, style: Style, text: &str);
}

/// A line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
  /// `None` for plain lines.
  pub style: Option<Style>,
  pub text: String,
  /// When the sink received the line.
  pub at: Instant,
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
  lines: Mutex<Vec<RecordedLine>>,
}

impl RecordingSink {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn lines(&self) -> Vec<RecordedLine> {
    self.guard().clone()
  }

  /// Text of the plain lines only, in arrival order.
  pub fn plain(&self) -> Vec<String> {
    self
      .guard()
      .iter()
      .filter(|line| line.style.is_none())
      .map(|line| line.text.clone())
      .collect()
  }

  /// Text of the lines recorded with the given style.
  pub fn styled_with(&self, style: Style) -> Vec<String> {
    self
      .guard()
      .iter()
      .filter(|line| line.style == Some(style))
      .map(|line| line.text.clone())
      .collect()
  }

  /// True if any recorded line contains `needle`.
  pub fn contains(&self, needle: &str) -> bool {
    self.guard().iter().any(|line| line.text.contains(needle))
  }

  fn guard(&self) -> MutexGuard<'_, Vec<RecordedLine>> {
    // Poisoning is ignored: every push completes or never happens.
    self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn record(&self, style: Option<Style>, text: &str) {
    self.guard().push(RecordedLine {
      style,
      text: text.to_string(),
      at: Instant::now(),
    });
  }
}

impl OutputSink for RecordingSink {
  fn line(&self, text: &str) {
    self.record(None, text);
  }

  fn styled(&self, style: Style, text: &str) {
    self.record(Some(style), text);
  }
}
