//! CLI output formatting utilities.
//!
//! Provides the colored terminal [`OutputSink`], status-line helpers and duration formatting.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use uebuild_lib::sink::{OutputSink, Style};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
}

/// Renders sink lines on a terminal stream.
///
/// Plain lines (build tool output) are written untouched; styled lines get a colored symbol.
#[derive(Debug, Clone, Copy)]
pub struct TerminalSink {
  stream: Stream,
}

impl From<Stream> for TerminalSink {
  fn from(stream: Stream) -> Self {
    Self { stream }
  }
}

impl TerminalSink {
  fn emit(&self, text: &str) {
    match self.stream {
      Stream::Stderr => eprintln!("{}", text),
      _ => println!("{}", text),
    }
  }
}

impl OutputSink for TerminalSink {
  fn line(&self, text: &str) {
    self.emit(text);
  }

  fn styled(&self, style: Style, text: &str) {
    let stream = self.stream;
    let rendered = match style {
      Style::Info => format!("{} {}", symbols::INFO.if_supports_color(stream, |s| s.blue()), text),
      Style::Success => format!(
        "{} {}",
        symbols::SUCCESS.if_supports_color(stream, |s| s.green()),
        text.if_supports_color(stream, |s| s.green())
      ),
      Style::Warning => format!(
        "{} {}",
        symbols::WARNING.if_supports_color(stream, |s| s.yellow()),
        text.if_supports_color(stream, |s| s.yellow())
      ),
      Style::Error => format!(
        "{} {}",
        symbols::ERROR.if_supports_color(stream, |s| s.red()),
        text.if_supports_color(stream, |s| s.red())
      ),
      Style::Highlight => format!("{}", text.if_supports_color(stream, |s| s.cyan())),
    };
    self.emit(&rendered);
  }
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

pub fn print_title(name: &str) {
  let title = format!("{} v{}", name, env!("CARGO_PKG_VERSION"));
  println!("{}", title.if_supports_color(Stream::Stdout, |s| s.bold()));
  println!();
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

/// Repeat a failed step's final output lines under the error message.
pub fn print_tail(lines: &[String]) {
  eprintln!("{}", "Last lines of build output:".if_supports_color(Stream::Stderr, |s| s.dimmed()));
  for line in lines {
    eprintln!("  {}", line.if_supports_color(Stream::Stderr, |s| s.red()));
  }
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
