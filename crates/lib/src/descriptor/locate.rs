use std::path::{Path, PathBuf};

use tracing::debug;

use super::DescriptorError;
use crate::consts::DESCRIPTOR_EXTENSION;
use crate::util::walk::{extension_is, find_first_file};

/// Find the project descriptor under `root`.
///
/// Returns the absolute path of the first `.uproject` file met by a depth-first walk in file-name
/// order. If several descriptors exist in different subdirectories only the first is returned;
/// callers that care must check for that themselves.
pub fn locate_descriptor(root: &Path) -> Result<PathBuf, DescriptorError> {
  // Walking from the canonical root makes every yielded path absolute.
  let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

  let found = find_first_file(&root, extension_is(DESCRIPTOR_EXTENSION)).map_err(|source| {
    DescriptorError::Traversal {
      root: root.clone(),
      source,
    }
  })?;

  match found {
    Some(path) => {
      debug!(path = %path.display(), "found project descriptor");
      Ok(path)
    }
    None => Err(DescriptorError::NotFound { root }),
  }
}
