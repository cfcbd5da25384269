//! Shared test helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const DESCRIPTOR: &str = r#"{"FileVersion":3,"EngineAssociation":"5.3","Modules":[{"Name":"Demo","Type":"Runtime"}]}"#;

#[cfg(windows)]
pub const TOOL_NAME: &str = "UnrealBuildTool.exe";

#[cfg(not(windows))]
pub const TOOL_NAME: &str = "UnrealBuildTool";

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a project and an engine installation.
pub struct TestEnv {
  pub temp: TempDir,
  pub project: PathBuf,
  pub engine: PathBuf,
}

impl TestEnv {
  /// A project containing `Demo.uproject` next to an empty engine directory.
  pub fn with_project() -> Self {
    let env = Self::empty();
    env.write_file("Demo.uproject", DESCRIPTOR);
    env
  }

  /// Empty project and engine directories.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let engine = temp.path().join("engine");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::create_dir_all(&engine).unwrap();
    Self { temp, project, engine }
  }

  /// Write a file relative to the project directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.project.join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }

  pub fn project_path(&self, relative_path: &str) -> PathBuf {
    self.project.join(relative_path)
  }

  /// Install a shell-script build tool at the conventional engine location.
  #[cfg(unix)]
  pub fn install_tool(&self, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dir = self.engine.join("Engine/Binaries/DotNET/UnrealBuildTool");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(TOOL_NAME);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Get a pre-configured Command for the uebuild binary.
  ///
  /// Points it at the isolated project and engine, and disables the exit prompt.
  pub fn uebuild_cmd(&self) -> Command {
    let mut cmd = uebuild_cmd();
    cmd.arg("--project-dir").arg(&self.project);
    cmd.arg("--engine-dir").arg(&self.engine);
    cmd.env("UEBUILD_NO_PAUSE", "1");
    cmd
  }
}

/// Get a Command for the uebuild binary with no environment overrides.
pub fn uebuild_cmd() -> Command {
  let mut cmd: Command = cargo_bin_cmd!("uebuild");
  cmd.env_remove("UEBUILD_ENGINE_DIR");
  cmd
}
