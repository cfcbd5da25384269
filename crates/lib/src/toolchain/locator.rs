//! Sources of engine installations.

use std::path::PathBuf;

use super::ToolchainError;

/// One installed engine as reported by a locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
  /// Entry name, usually the engine version ("5.3").
  pub name: String,
  /// Installation root, or `None` if the entry does not record one.
  pub directory: Option<PathBuf>,
}

impl Installation {
  pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
    Self {
      name: name.into(),
      directory: Some(directory.into()),
    }
  }
}

/// Discovers engine installations on the host.
pub trait InstallationLocator: Send + Sync {
  /// List every known installation.
  ///
  /// An error means the lookup mechanism itself is unusable, not that nothing is installed; an
  /// empty list is a valid answer.
  fn installations(&self) -> Result<Vec<Installation>, ToolchainError>;
}

/// Locator over a fixed list of installations.
///
/// Used when the operator names the engine directory explicitly, and as a stand-in for the
/// registry in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator {
  installations: Vec<Installation>,
}

impl FixedLocator {
  pub fn new(installations: Vec<Installation>) -> Self {
    Self { installations }
  }

  /// A locator reporting exactly one installation rooted at `directory`.
  pub fn single(directory: impl Into<PathBuf>) -> Self {
    Self::new(vec![Installation::new("custom", directory)])
  }
}

impl InstallationLocator for FixedLocator {
  fn installations(&self) -> Result<Vec<Installation>, ToolchainError> {
    Ok(self.installations.clone())
  }
}
