mod build;
mod clean;
mod info;

use std::path::PathBuf;

use uebuild_lib::config::engine_dir_override;
use uebuild_lib::toolchain::{FixedLocator, InstallationLocator, RegistryLocator};

pub use build::{cmd_build, failure_tail};
pub use clean::cmd_clean;
pub use info::cmd_info;

/// Options shared by every subcommand.
pub struct Context {
  pub project_dir: PathBuf,
  pub engine_dir: Option<PathBuf>,
}

impl Context {
  /// An explicit engine directory (flag first, then environment) replaces the registry lookup.
  pub fn locator(&self) -> Box<dyn InstallationLocator> {
    match self.engine_dir.clone().or_else(engine_dir_override) {
      Some(dir) => Box::new(FixedLocator::single(dir)),
      None => Box::new(RegistryLocator),
    }
  }
}
