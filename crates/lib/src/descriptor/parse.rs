use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::DescriptorError;

/// The fields of a `.uproject` document this tool cares about.
///
/// Entries stay as raw JSON so that one malformed module does not reject the whole file.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
  #[serde(rename = "Modules")]
  modules: Option<Value>,

  #[serde(rename = "EngineAssociation")]
  engine_association: Option<Value>,
}

/// Read-only view of a parsed project descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
  path: PathBuf,
  modules: Option<Value>,
  engine_association: Option<String>,
}

impl ProjectDescriptor {
  /// Read and parse the descriptor at `path`.
  pub fn load(path: &Path) -> Result<Self, DescriptorError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DescriptorError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(path, &contents)
  }

  /// Parse descriptor `contents`; `path` is only used for error messages.
  pub fn parse(path: &Path, contents: &str) -> Result<Self, DescriptorError> {
    let raw: RawDescriptor = serde_json::from_str(contents).map_err(|source| DescriptorError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    Ok(Self {
      path: path.to_path_buf(),
      modules: raw.modules,
      engine_association: raw.engine_association.and_then(|v| v.as_str().map(str::to_string)),
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// The engine version or identifier the project was created with, if recorded.
  pub fn engine_association(&self) -> Option<&str> {
    self.engine_association.as_deref().filter(|s| !s.is_empty())
  }

  /// The raw module entries, or an empty slice if `Modules` is absent or not an array.
  pub fn modules(&self) -> &[Value] {
    match &self.modules {
      Some(Value::Array(modules)) => modules,
      _ => &[],
    }
  }

  /// The canonical project name: the `Name` of the first module entry that has one.
  ///
  /// Entries that are not objects, or whose `Name` is missing, empty or not a string, are logged
  /// and skipped. Fails only if `Modules` is absent, is not an array, or has no usable entry.
  pub fn module_name(&self) -> Result<&str, DescriptorError> {
    match &self.modules {
      Some(Value::Array(_)) => {}
      Some(_) => return Err(self.schema_error("`Modules` is not an array")),
      None => return Err(self.schema_error("`Modules` key not found")),
    }

    for (index, module) in self.modules().iter().enumerate() {
      match module.get("Name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => return Ok(name),
        _ => warn!(path = %self.path.display(), index, "module entry has no `Name`, skipping"),
      }
    }

    Err(self.schema_error("no module entry declares a `Name`"))
  }

  fn schema_error(&self, message: &str) -> DescriptorError {
    DescriptorError::Schema {
      path: self.path.clone(),
      message: message.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::testutil::write;
  use tempfile::TempDir;
  use tracing_test::traced_test;

  fn parse(contents: &str) -> Result<ProjectDescriptor, DescriptorError> {
    ProjectDescriptor::parse(Path::new("Test.uproject"), contents)
  }

  #[test]
  fn minimal_descriptor() {
    let descriptor = parse(r#"{"Modules":[{"Name":"Demo"}]}"#).unwrap();
    assert_eq!(descriptor.module_name().unwrap(), "Demo");
    assert_eq!(descriptor.engine_association(), None);
  }

  #[test]
  fn realistic_descriptor() {
    let contents = r#"{
      "FileVersion": 3,
      "EngineAssociation": "5.3",
      "Category": "",
      "Description": "",
      "Modules": [
        { "Name": "ShooterGame", "Type": "Runtime", "LoadingPhase": "Default" },
        { "Name": "ShooterGameEditor", "Type": "Editor" }
      ],
      "Plugins": [ { "Name": "ModelingToolsEditorMode", "Enabled": true } ]
    }"#;

    let descriptor = parse(contents).unwrap();
    assert_eq!(descriptor.module_name().unwrap(), "ShooterGame");
    assert_eq!(descriptor.engine_association(), Some("5.3"));
  }

  #[test]
  #[traced_test]
  fn skips_module_without_name() {
    let descriptor = parse(r#"{"Modules":[{"Type":"Runtime"},{"Name":"Foo"},{"Name":"Bar"}]}"#).unwrap();
    assert_eq!(descriptor.module_name().unwrap(), "Foo");
    assert!(logs_contain("module entry has no `Name`, skipping"));
  }

  #[test]
  fn modules_keeps_malformed_entries() {
    let descriptor = parse(r#"{"Modules":[42,{"Type":"Runtime"},{"Name":"Foo"}]}"#).unwrap();
    let modules = descriptor.modules();
    assert_eq!(modules.len(), 3);
    assert_eq!(modules[0], 42);
    assert_eq!(modules[2]["Name"], "Foo");
  }

  #[test]
  fn modules_is_empty_when_absent_or_wrong_shaped() {
    assert!(parse(r#"{"FileVersion":3}"#).unwrap().modules().is_empty());
    assert!(parse(r#"{"Modules":{"Name":"Demo"}}"#).unwrap().modules().is_empty());
    assert!(parse(r#"{"Modules":"Demo"}"#).unwrap().modules().is_empty());
  }

  #[test]
  fn skips_non_object_and_non_string_names() {
    let descriptor = parse(r#"{"Modules":[42,{"Name":7},{"Name":""},{"Name":"Real"}]}"#).unwrap();
    assert_eq!(descriptor.module_name().unwrap(), "Real");
  }

  #[test]
  fn empty_modules_is_schema_error() {
    let err = parse(r#"{"Modules":[]}"#).unwrap().module_name().unwrap_err();
    assert!(matches!(err, DescriptorError::Schema { .. }));
  }

  #[test]
  fn absent_modules_is_schema_error() {
    let err = parse(r#"{"FileVersion":3}"#).unwrap().module_name().unwrap_err();
    assert!(matches!(err, DescriptorError::Schema { ref message, .. } if message.contains("not found")));
  }

  #[test]
  fn wrong_shaped_modules_is_schema_error() {
    let err = parse(r#"{"Modules":{"Name":"Demo"}}"#).unwrap().module_name().unwrap_err();
    assert!(matches!(err, DescriptorError::Schema { ref message, .. } if message.contains("not an array")));
  }

  #[test]
  fn no_named_module_is_schema_error() {
    let err = parse(r#"{"Modules":[{},{"Type":"Editor"}]}"#).unwrap().module_name().unwrap_err();
    assert!(matches!(err, DescriptorError::Schema { .. }));
  }

  #[test]
  fn invalid_json_is_parse_error() {
    let err = parse("{ not json").unwrap_err();
    assert!(matches!(err, DescriptorError::Parse { .. }));
  }

  #[test]
  fn non_object_document_is_parse_error() {
    let err = parse(r#"["Modules"]"#).unwrap_err();
    assert!(matches!(err, DescriptorError::Parse { .. }));
  }

  #[test]
  fn load_reads_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = write(temp.path(), "Demo.uproject", r#"{"Modules":[{"Name":"Demo"}]}"#);

    let descriptor = ProjectDescriptor::load(&path).unwrap();
    assert_eq!(descriptor.path(), path);
    assert_eq!(descriptor.module_name().unwrap(), "Demo");
  }

  #[test]
  fn load_missing_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let err = ProjectDescriptor::load(&temp.path().join("Missing.uproject")).unwrap_err();
    assert!(matches!(err, DescriptorError::Read { .. }));
    assert!(err.to_string().contains("Missing.uproject"));
  }
}
