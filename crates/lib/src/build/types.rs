//! Types for build-tool invocations.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::config::BuildSettings;
use crate::consts::EDITOR_TARGET_SUFFIX;

/// Which job a build-tool run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
  /// Regenerate IDE project files for the current platform.
  GenerateProjectFiles,
  /// Compile the editor target.
  Compile,
}

impl fmt::Display for BuildStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildStep::GenerateProjectFiles => write!(f, "project file generation"),
      BuildStep::Compile => write!(f, "compile"),
    }
  }
}

/// Errors from launching or supervising the build tool.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The process could not be started at all.
  #[error("error starting {step} command {program}")]
  LaunchFailed {
    step: BuildStep,
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Reading the tool's output failed mid-run. The process is killed.
  #[error("error reading {step} output")]
  Stream {
    step: BuildStep,
    #[source]
    source: io::Error,
  },

  #[error("error waiting for {step} to finish")]
  Wait {
    step: BuildStep,
    #[source]
    source: io::Error,
  },

  /// The tool ran and reported failure. Its own diagnostics have already been streamed;
  /// `tail` keeps the last lines for the final report.
  #[error("{step} failed: {}", describe_exit(.code))]
  CompileFailed {
    step: BuildStep,
    code: Option<i32>,
    tail: Vec<String>,
  },
}

fn describe_exit(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("exit status {}", code),
    None => "terminated by signal".to_string(),
  }
}

/// A fully computed build-tool command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocation {
  pub step: BuildStep,
  pub program: PathBuf,
  pub args: Vec<OsString>,
  /// Working directory for the process; inherited from the caller when `None`.
  pub working_dir: Option<PathBuf>,
}

impl BuildInvocation {
  pub fn new<I, S>(step: BuildStep, program: impl Into<PathBuf>, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    Self {
      step,
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
      working_dir: None,
    }
  }

  pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.working_dir = Some(dir.into());
    self
  }

  /// `<tool> <descriptor> <Module>Editor <Configuration> <Platform> -WaitMutex`
  ///
  /// `-WaitMutex` makes the tool wait for another running instance instead of failing.
  pub fn compile(tool: &Path, descriptor: &Path, module: &str, settings: &BuildSettings) -> Self {
    let args: Vec<OsString> = vec![
      descriptor.into(),
      format!("{}{}", module, EDITOR_TARGET_SUFFIX).into(),
      settings.configuration.clone().into(),
      settings.platform.clone().into(),
      "-WaitMutex".into(),
    ];
    Self::new(BuildStep::Compile, tool, args).in_project_dir(descriptor)
  }

  /// `<tool> <descriptor> -Game -CurrentPlatform -ProjectFiles`
  pub fn generate_project_files(tool: &Path, descriptor: &Path) -> Self {
    let args: Vec<OsString> = vec![
      descriptor.into(),
      "-Game".into(),
      "-CurrentPlatform".into(),
      "-ProjectFiles".into(),
    ];
    Self::new(BuildStep::GenerateProjectFiles, tool, args).in_project_dir(descriptor)
  }

  fn in_project_dir(self, descriptor: &Path) -> Self {
    match descriptor.parent().filter(|dir| !dir.as_os_str().is_empty()) {
      Some(dir) => self.with_working_dir(dir),
      None => self,
    }
  }
}

/// Outcome of a successful build-tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
  pub step: BuildStep,
  /// Number of output lines forwarded to the sink.
  pub lines: usize,
  pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compile_arguments() {
    let invocation = BuildInvocation::compile(
      Path::new("/ue/UnrealBuildTool"),
      Path::new("/projects/Demo/Demo.uproject"),
      "Demo",
      &BuildSettings::default(),
    );

    assert_eq!(invocation.step, BuildStep::Compile);
    assert_eq!(invocation.program, PathBuf::from("/ue/UnrealBuildTool"));
    assert_eq!(
      invocation.args,
      vec!["/projects/Demo/Demo.uproject", "DemoEditor", "Development", "Win64", "-WaitMutex"]
    );
    assert_eq!(invocation.working_dir, Some(PathBuf::from("/projects/Demo")));
  }

  #[test]
  fn compile_honours_settings() {
    let settings = BuildSettings {
      configuration: "DebugGame".to_string(),
      platform: "Linux".to_string(),
    };
    let invocation = BuildInvocation::compile(Path::new("ubt"), Path::new("Demo.uproject"), "Demo", &settings);

    assert_eq!(invocation.args[2], "DebugGame");
    assert_eq!(invocation.args[3], "Linux");
    assert_eq!(invocation.working_dir, None);
  }

  #[test]
  fn project_file_arguments() {
    let invocation =
      BuildInvocation::generate_project_files(Path::new("/ue/UnrealBuildTool"), Path::new("/p/Demo.uproject"));

    assert_eq!(invocation.step, BuildStep::GenerateProjectFiles);
    assert_eq!(invocation.args, vec!["/p/Demo.uproject", "-Game", "-CurrentPlatform", "-ProjectFiles"]);
  }

  #[test]
  fn compile_failed_message() {
    let err = BuildError::CompileFailed {
      step: BuildStep::Compile,
      code: Some(6),
      tail: Vec::new(),
    };
    assert_eq!(err.to_string(), "compile failed: exit status 6");

    let err = BuildError::CompileFailed {
      step: BuildStep::GenerateProjectFiles,
      code: None,
      tail: Vec::new(),
    };
    assert_eq!(err.to_string(), "project file generation failed: terminated by signal");
  }
}
