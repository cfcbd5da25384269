//! Test utilities for uebuild-lib.
//!
//! Filesystem fixtures and a shell stand-in for the build tool.

use std::path::{Path, PathBuf};

/// Create an empty file at `relative` under `root`, creating parent directories.
pub fn touch(root: &Path, relative: &str) -> PathBuf {
  write(root, relative, "")
}

/// Write `content` to `relative` under `root`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(&path, content).unwrap();
  path
}

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

/// Build a directory chain under `root` whose full path is longer than the kernel will open.
///
/// Each half is created through a path under the limit and the second is then moved inside the
/// first, so a walk from `root` fails with `ENAMETOOLONG` partway down.
#[cfg(target_os = "linux")]
pub fn overlong_tree(root: &Path) -> PathBuf {
  let segment = "d".repeat(200);
  let chain = |base: PathBuf| {
    let mut dir = base;
    for _ in 0..12 {
      dir.push(&segment);
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
  };

  let outer = chain(root.join("deep"));
  let inner_base = root.join("staged");
  chain(inner_base.clone());
  let moved = outer.join("staged");
  std::fs::rename(&inner_base, &moved).unwrap();
  moved
}
