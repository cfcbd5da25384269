//! End-to-end workflows.
//!
//! Stages run strictly in order and the first failure ends the run:
//!
//! - [`Workflow::Build`]: locate descriptor, read module name, resolve build tool, compile.
//! - [`Workflow::Rebuild`]: the same discovery, then delete cached artifacts, regenerate project
//!   files, and compile.
//!
//! Cleanup runs only after the build tool has been resolved, so a machine without an engine never
//! ends up with a stripped project it cannot rebuild.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::build::{BuildError, BuildInvocation, BuildSummary};
use crate::cleanup::{CleanupError, CleanupPlan, CleanupReport};
use crate::config::BuildSettings;
use crate::descriptor::{DescriptorError, ProjectDescriptor, locate_descriptor};
use crate::sink::{OutputSink, Style};
use crate::toolchain::{InstallationLocator, ToolchainError, resolve_build_tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
  /// Compile only.
  Build,
  /// Clean, regenerate project files, then compile.
  Rebuild,
}

#[derive(Debug, Error)]
pub enum PipelineError {
  #[error(transparent)]
  Descriptor(#[from] DescriptorError),

  #[error(transparent)]
  Toolchain(#[from] ToolchainError),

  #[error(transparent)]
  Cleanup(#[from] CleanupError),

  #[error(transparent)]
  Build(#[from] BuildError),
}

/// The project found under the pipeline root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
  pub descriptor: PathBuf,
  pub name: String,
  pub engine_association: Option<String>,
}

/// Project and build tool, resolved without running anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
  pub project: Project,
  pub build_tool: PathBuf,
}

#[derive(Debug)]
pub struct PipelineSummary {
  pub project: Project,
  pub build_tool: PathBuf,
  /// Present for [`Workflow::Rebuild`].
  pub cleanup: Option<CleanupReport>,
  /// Present for [`Workflow::Rebuild`].
  pub generate: Option<BuildSummary>,
  pub compile: BuildSummary,
}

pub struct Pipeline<'a> {
  root: PathBuf,
  locator: &'a dyn InstallationLocator,
  sink: &'a dyn OutputSink,
  settings: BuildSettings,
}

impl<'a> Pipeline<'a> {
  /// A pipeline for the project under `root`.
  pub fn new(root: impl Into<PathBuf>, locator: &'a dyn InstallationLocator, sink: &'a dyn OutputSink) -> Self {
    Self {
      root: root.into(),
      locator,
      sink,
      settings: BuildSettings::default(),
    }
  }

  pub fn with_settings(mut self, settings: BuildSettings) -> Self {
    self.settings = settings;
    self
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Locate and parse the descriptor.
  pub fn discover(&self) -> Result<Project, PipelineError> {
    let path = locate_descriptor(&self.root)?;
    let descriptor = ProjectDescriptor::load(&path)?;
    let name = descriptor.module_name()?.to_string();

    info!(descriptor = %path.display(), name = %name, "project discovered");
    self.sink.styled(Style::Highlight, &format!("Project {} was found.", name));

    Ok(Project {
      engine_association: descriptor.engine_association().map(str::to_string),
      descriptor: path,
      name,
    })
  }

  /// Resolve the build tool through the configured locator.
  pub fn resolve_tool(&self) -> Result<PathBuf, PipelineError> {
    let tool = resolve_build_tool(self.locator, self.sink)?;
    self.sink.styled(Style::Info, &format!("Found UBT path: {}", tool.display()));
    Ok(tool)
  }

  pub fn inspect(&self) -> Result<Inspection, PipelineError> {
    let project = self.discover()?;
    let build_tool = self.resolve_tool()?;
    Ok(Inspection { project, build_tool })
  }

  /// Discover the project and delete its cached artifacts, without building.
  pub fn clean(&self) -> Result<CleanupReport, PipelineError> {
    let project = self.discover()?;
    self.cleanup(&project)
  }

  pub async fn run(&self, workflow: Workflow) -> Result<PipelineSummary, PipelineError> {
    let project = self.discover()?;
    let build_tool = self.resolve_tool()?;

    let (cleanup, generate) = match workflow {
      Workflow::Build => (None, None),
      Workflow::Rebuild => {
        let report = self.cleanup(&project)?;

        self.sink.styled(Style::Info, "Generating project files...");
        let invocation = BuildInvocation::generate_project_files(&build_tool, &project.descriptor);
        let summary = invocation.run(self.sink).await?;
        self.sink.styled(Style::Success, "Finished generating project files.");

        (Some(report), Some(summary))
      }
    };

    self.sink.styled(Style::Info, "Compiling project...");
    let invocation = BuildInvocation::compile(&build_tool, &project.descriptor, &project.name, &self.settings);
    let compile = invocation.run(self.sink).await?;
    self.sink.styled(Style::Success, "Finished compiling project.");
    self
      .sink
      .styled(Style::Highlight, &format!("{} was successfully rebuilt.", project.name));

    Ok(PipelineSummary {
      project,
      build_tool,
      cleanup,
      generate,
      compile,
    })
  }

  fn cleanup(&self, project: &Project) -> Result<CleanupReport, PipelineError> {
    self.sink.styled(Style::Info, "Deleting temporary files...");
    let report = CleanupPlan::for_project(&self.root, &project.name).run()?;
    info!(removed = report.removed.len(), absent = report.absent.len(), "cleanup complete");
    self.sink.styled(Style::Success, "Deleting temporary files... done.");
    Ok(report)
  }
}
