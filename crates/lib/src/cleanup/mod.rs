//! Removal of cached build artifacts before a rebuild.
//!
//! Every target is attempted even when an earlier one fails; failures are collected and reported
//! together. A target that does not exist counts as already cleaned.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::CACHE_DIRECTORIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
  /// Removed recursively.
  Directory,
  File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupTarget {
  pub path: PathBuf,
  pub kind: TargetKind,
}

impl CleanupTarget {
  pub fn directory(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      kind: TargetKind::Directory,
    }
  }

  pub fn file(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      kind: TargetKind::File,
    }
  }

  fn remove(&self) -> TargetOutcome {
    let result = match self.kind {
      TargetKind::Directory => std::fs::remove_dir_all(&self.path),
      TargetKind::File => std::fs::remove_file(&self.path),
    };

    match result {
      Ok(()) => TargetOutcome::Removed,
      Err(e) if e.kind() == io::ErrorKind::NotFound => TargetOutcome::Absent,
      Err(e) => TargetOutcome::Failed(e),
    }
  }
}

/// What happened to one target.
#[derive(Debug)]
pub enum TargetOutcome {
  Removed,
  Absent,
  Failed(io::Error),
}

/// A failed deletion.
#[derive(Debug)]
pub struct CleanupFailure {
  pub target: CleanupTarget,
  pub error: io::Error,
}

impl fmt::Display for CleanupFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.target.path.display(), self.error)
  }
}

/// Every deletion that failed during one cleanup run.
#[derive(Debug, Error)]
#[error("error deleting files:\n{}", format_failures(.failures))]
pub struct CleanupError {
  pub failures: Vec<CleanupFailure>,
}

fn format_failures(failures: &[CleanupFailure]) -> String {
  failures
    .iter()
    .map(|failure| format!("  {}", failure))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Per-target results of a cleanup run with no failures.
#[derive(Debug, Default)]
pub struct CleanupReport {
  pub removed: Vec<PathBuf>,
  pub absent: Vec<PathBuf>,
}

/// An ordered list of paths to delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
  pub targets: Vec<CleanupTarget>,
}

impl CleanupPlan {
  pub fn new(targets: Vec<CleanupTarget>) -> Self {
    Self { targets }
  }

  /// The standard cache directories plus the generated `<module>.sln`, under `project_root`.
  pub fn for_project(project_root: &Path, module: &str) -> Self {
    let mut targets: Vec<CleanupTarget> = CACHE_DIRECTORIES
      .iter()
      .map(|dir| CleanupTarget::directory(project_root.join(dir)))
      .collect();
    targets.push(CleanupTarget::file(project_root.join(format!("{}.sln", module))));
    Self { targets }
  }

  /// Delete every target, then report all failures at once.
  pub fn run(&self) -> Result<CleanupReport, CleanupError> {
    let mut report = CleanupReport::default();
    let mut failures = Vec::new();

    for target in &self.targets {
      match target.remove() {
        TargetOutcome::Removed => {
          debug!(path = %target.path.display(), "removed");
          report.removed.push(target.path.clone());
        }
        TargetOutcome::Absent => report.absent.push(target.path.clone()),
        TargetOutcome::Failed(error) => {
          warn!(path = %target.path.display(), error = %error, "failed to delete");
          failures.push(CleanupFailure {
            target: target.clone(),
            error,
          });
        }
      }
    }

    if failures.is_empty() {
      Ok(report)
    } else {
      Err(CleanupError { failures })
    }
  }
}
