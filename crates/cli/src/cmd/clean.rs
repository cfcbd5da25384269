use anyhow::{Context as _, Result};
use owo_colors::Stream;

use uebuild_lib::pipeline::Pipeline;

use super::Context;
use crate::output::{TerminalSink, print_stat, print_title};

pub fn cmd_clean(ctx: &Context) -> Result<()> {
  print_title("Unreal Utility");

  let sink = TerminalSink::from(Stream::Stdout);
  let locator = ctx.locator();
  let report = Pipeline::new(&ctx.project_dir, locator.as_ref(), &sink)
    .clean()
    .context("Clean failed")?;

  println!();
  print_stat("Removed", &report.removed.len().to_string());
  print_stat("Already absent", &report.absent.len().to_string());

  Ok(())
}
