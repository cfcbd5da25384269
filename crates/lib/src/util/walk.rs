//! Depth-first "first match" file search.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Walk `root` depth-first and return the first regular file accepted by `predicate`.
///
/// Siblings are visited in file-name order, so the result does not depend on the order in which
/// the filesystem returns directory entries. The walk stops at the first match; nothing after it
/// is visited. Errors raised by the walk itself (unreadable directory, missing root) are returned
/// rather than skipped.
///
/// Symlinks are not followed.
pub fn find_first_file<P>(root: &Path, mut predicate: P) -> Result<Option<PathBuf>, walkdir::Error>
where
  P: FnMut(&DirEntry) -> bool,
{
  for entry in WalkDir::new(root).sort_by_file_name() {
    let entry = entry?;
    if entry.file_type().is_file() && predicate(&entry) {
      debug!(root = %root.display(), path = %entry.path().display(), "found first matching file");
      return Ok(Some(entry.into_path()));
    }
  }

  debug!(root = %root.display(), "walk exhausted without a match");
  Ok(None)
}

/// Predicate matching files with the given extension (without the dot).
pub fn extension_is(extension: &str) -> impl Fn(&DirEntry) -> bool + '_ {
  move |entry| entry.path().extension().is_some_and(|ext| ext == extension)
}

/// Predicate matching files with exactly the given name.
pub fn file_name_is(name: &str) -> impl Fn(&DirEntry) -> bool + '_ {
  move |entry| entry.file_name() == name
}
