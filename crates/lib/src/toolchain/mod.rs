//! Build-tool discovery.
//!
//! The build tool is found without any operator configuration:
//! 1. ask an [`InstallationLocator`] for installed engines,
//! 2. pick the entry whose name sorts last,
//! 3. try the conventional location under that installation,
//! 4. fall back to a full recursive search of the installation directory.

mod locator;
mod registry;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{BUILD_TOOL_NAME, BUILD_TOOL_SUBPATH};
use crate::sink::{OutputSink, Style};
use crate::util::walk::{file_name_is, find_first_file};

pub use locator::{FixedLocator, Installation, InstallationLocator};
pub use registry::RegistryLocator;

/// Errors raised while resolving the build tool.
#[derive(Debug, Error)]
pub enum ToolchainError {
  #[error("installation registry unavailable: {message}")]
  RegistryUnavailable { message: String },

  #[error("no engine installations found")]
  NoInstallationsFound,

  #[error("engine installation {name} does not record an installation directory")]
  MissingInstallDirectory { name: String },

  #[error("invalid installation path: {path}")]
  InvalidInstallPath { path: PathBuf },

  #[error("file '{name}' not found in directory '{root}'")]
  ToolNotFound { name: String, root: PathBuf },

  #[error("error while searching for {name} in {root}")]
  Search {
    name: String,
    root: PathBuf,
    #[source]
    source: walkdir::Error,
  },
}

/// Pick the installation whose name sorts last.
///
/// Names are compared as plain strings, which approximates "newest version" but is not a version
/// comparison: "5.9" sorts after "5.10".
pub fn select_installation(installations: &[Installation]) -> Option<&Installation> {
  installations.iter().max_by(|a, b| a.name.cmp(&b.name))
}

/// Where the build tool lives in a standard installation.
pub fn conventional_tool_path(install_dir: &Path) -> PathBuf {
  let mut path = install_dir.to_path_buf();
  path.extend(BUILD_TOOL_SUBPATH);
  path.push(BUILD_TOOL_NAME);
  path
}

/// Resolve the build tool executable.
///
/// The recursive search can take a while on a full engine tree, so it is announced on `sink`
/// before it starts and its result is reported after.
pub fn resolve_build_tool(locator: &dyn InstallationLocator, sink: &dyn OutputSink) -> Result<PathBuf, ToolchainError> {
  let installations = locator.installations()?;
  debug!(count = installations.len(), "engine installations reported");

  let selected = select_installation(&installations).ok_or(ToolchainError::NoInstallationsFound)?;
  let install_dir = selected
    .directory
    .as_deref()
    .ok_or_else(|| ToolchainError::MissingInstallDirectory {
      name: selected.name.clone(),
    })?;
  info!(name = %selected.name, dir = %install_dir.display(), "selected engine installation");

  if !install_dir.exists() {
    return Err(ToolchainError::InvalidInstallPath {
      path: install_dir.to_path_buf(),
    });
  }

  let conventional = conventional_tool_path(install_dir);
  if conventional.exists() {
    return Ok(conventional);
  }

  sink.styled(
    Style::Warning,
    &format!("{} not found in default path. Searching for it...", BUILD_TOOL_NAME),
  );

  match find_first_file(install_dir, file_name_is(BUILD_TOOL_NAME)) {
    Ok(Some(path)) => {
      sink.styled(Style::Success, "found.");
      Ok(path)
    }
    Ok(None) => {
      sink.styled(Style::Error, "not found.");
      Err(ToolchainError::ToolNotFound {
        name: BUILD_TOOL_NAME.to_string(),
        root: install_dir.to_path_buf(),
      })
    }
    Err(source) => {
      sink.styled(Style::Error, "not found.");
      Err(ToolchainError::Search {
        name: BUILD_TOOL_NAME.to_string(),
        root: install_dir.to_path_buf(),
        source,
      })
    }
  }
}
