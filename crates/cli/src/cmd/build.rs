//! Implementation of the `uebuild build` and `uebuild rebuild` commands.

use anyhow::{Context as _, Result};
use owo_colors::Stream;
use tracing::info;

use uebuild_lib::build::BuildError;
use uebuild_lib::config::BuildSettings;
use uebuild_lib::pipeline::{Pipeline, PipelineError, Workflow};

use super::Context;
use crate::output::{TerminalSink, format_duration, print_stat, print_title};

/// Run the build or rebuild workflow for the project under the context's directory.
///
/// Build-tool output is streamed to stdout as it is produced. On success prints how long each
/// build-tool step took.
pub fn cmd_build(ctx: &Context, workflow: Workflow, settings: BuildSettings) -> Result<()> {
  print_title(match workflow {
    Workflow::Build => "Unreal Builder",
    Workflow::Rebuild => "Unreal Utility",
  });

  let sink = TerminalSink::from(Stream::Stdout);
  let locator = ctx.locator();
  let pipeline = Pipeline::new(&ctx.project_dir, locator.as_ref(), &sink).with_settings(settings);

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let summary = rt.block_on(pipeline.run(workflow)).with_context(|| match workflow {
    Workflow::Build => "Build failed",
    Workflow::Rebuild => "Rebuild failed",
  })?;

  println!();
  if let Some(generate) = &summary.generate {
    print_stat("Project files", &format_duration(generate.elapsed));
  }
  print_stat("Compile", &format_duration(summary.compile.elapsed));
  info!(project = %summary.project.name, tool = %summary.build_tool.display(), "workflow complete");

  Ok(())
}

/// The last lines a failed build-tool step printed, if `err` came from one.
pub fn failure_tail(err: &anyhow::Error) -> Option<&[String]> {
  match err.downcast_ref::<PipelineError>()? {
    PipelineError::Build(BuildError::CompileFailed { tail, .. }) if !tail.is_empty() => Some(tail.as_slice()),
    _ => None,
  }
}
