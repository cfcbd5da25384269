use anyhow::{Context as _, Result};
use owo_colors::Stream;

use uebuild_lib::pipeline::Pipeline;

use super::Context;
use crate::output::{OutputFormat, TerminalSink, print_json, print_stat, print_title};

/// Show the descriptor, project name and build tool a build would use, without running it.
pub fn cmd_info(ctx: &Context, output: OutputFormat) -> Result<()> {
  // Status lines go to stderr in JSON mode so stdout stays parseable.
  let sink = if output.is_json() {
    TerminalSink::from(Stream::Stderr)
  } else {
    print_title("Unreal Builder");
    TerminalSink::from(Stream::Stdout)
  };

  let locator = ctx.locator();
  let inspection = Pipeline::new(&ctx.project_dir, locator.as_ref(), &sink)
    .inspect()
    .context("Inspection failed")?;

  if output.is_json() {
    print_json(&inspection)?;
  } else {
    println!();
    print_stat("Descriptor", &inspection.project.descriptor.display().to_string());
    print_stat("Project", &inspection.project.name);
    if let Some(engine) = &inspection.project.engine_association {
      print_stat("Engine", engine);
    }
    print_stat("Build tool", &inspection.build_tool.display().to_string());
  }

  Ok(())
}
