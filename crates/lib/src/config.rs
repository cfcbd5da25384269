//! Runtime settings.
//!
//! There is no configuration file. Everything that can be tuned comes from command-line flags
//! (handled by the CLI) or from the environment variables read here.

use std::path::PathBuf;

use crate::consts::{DEFAULT_CONFIGURATION, DEFAULT_PLATFORM, ENGINE_DIR_ENV, NO_PAUSE_ENV};

/// Configuration and platform literals passed to the compile invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
  pub configuration: String,
  pub platform: String,
}

impl Default for BuildSettings {
  fn default() -> Self {
    Self {
      configuration: DEFAULT_CONFIGURATION.to_string(),
      platform: DEFAULT_PLATFORM.to_string(),
    }
  }
}

/// Returns the engine installation directory set through `UEBUILD_ENGINE_DIR`.
///
/// An empty value is treated as unset.
pub fn engine_dir_override() -> Option<PathBuf> {
  std::env::var_os(ENGINE_DIR_ENV)
    .filter(|value| !value.is_empty())
    .map(PathBuf::from)
}

/// Returns true when `UEBUILD_NO_PAUSE` is set to anything other than an explicit "off" value.
pub fn pause_disabled() -> bool {
  match std::env::var(NO_PAUSE_ENV) {
    Ok(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no"),
    Err(_) => false,
  }
}
