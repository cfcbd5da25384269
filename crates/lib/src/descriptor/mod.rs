//! Project descriptor discovery and parsing.
//!
//! A project directory contains one `.uproject` file: a JSON document whose `Modules` array names
//! the project's compilation units. The first well-formed module name is the project's canonical
//! name, which the compile step turns into the `<Name>Editor` target.

mod locate;
mod parse;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use locate::locate_descriptor;
pub use parse::ProjectDescriptor;

/// Errors raised while finding or reading the project descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
  #[error("no .uproject file found in directory: {root}\nAre you sure this is an Unreal Engine project?")]
  NotFound { root: PathBuf },

  #[error("error while searching for the .uproject file in {root}")]
  Traversal {
    root: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("error reading file {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{path} is not valid JSON")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("no project name found in {path}: {message}")]
  Schema { path: PathBuf, message: String },
}
