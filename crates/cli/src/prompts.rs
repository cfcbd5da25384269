use std::io::{self, IsTerminal};

use anyhow::Result;
use uebuild_lib::config::pause_disabled;

/// Keep a console window open until the operator presses Enter.
///
/// Skipped unless both stdin and stdout are terminals, and when disabled by flag or environment.
pub fn acknowledge(no_pause: bool) -> Result<()> {
  if no_pause || pause_disabled() {
    return Ok(());
  }

  if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
    return Ok(());
  }

  println!();
  println!("Press Enter to exit...");

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;
  Ok(())
}
