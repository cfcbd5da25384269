//! Installation lookup through the Windows registry.
//!
//! The Epic Games launcher records each engine version as a subkey of
//! `HKLM\SOFTWARE\EpicGames\Unreal Engine` with an `InstalledDirectory` string value.

use super::{Installation, InstallationLocator, ToolchainError};

/// Locator backed by the launcher's registry entries.
///
/// On hosts without a registry every lookup fails with [`ToolchainError::RegistryUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryLocator;

impl InstallationLocator for RegistryLocator {
  #[cfg(windows)]
  fn installations(&self) -> Result<Vec<Installation>, ToolchainError> {
    use std::path::PathBuf;

    use tracing::debug;
    use winreg::RegKey;
    use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};

    use crate::consts::{INSTALL_DIRECTORY_VALUE, REGISTRY_KEY};

    let engines = RegKey::predef(HKEY_LOCAL_MACHINE)
      .open_subkey_with_flags(REGISTRY_KEY, KEY_READ)
      .map_err(|e| ToolchainError::RegistryUnavailable {
        message: format!("error opening registry key HKLM\\{}: {}", REGISTRY_KEY, e),
      })?;

    let mut installations = Vec::new();
    for name in engines.enum_keys() {
      let name = name.map_err(|e| ToolchainError::RegistryUnavailable {
        message: format!("error reading subkey names: {}", e),
      })?;

      let directory = engines
        .open_subkey_with_flags(&name, KEY_READ)
        .and_then(|key| key.get_value::<String, _>(INSTALL_DIRECTORY_VALUE))
        .ok()
        .map(PathBuf::from);

      debug!(name = %name, directory = ?directory, "registry installation entry");
      installations.push(Installation { name, directory });
    }

    Ok(installations)
  }

  #[cfg(not(windows))]
  fn installations(&self) -> Result<Vec<Installation>, ToolchainError> {
    Err(ToolchainError::RegistryUnavailable {
      message: format!(
        "the installation registry only exists on Windows; set {} to the engine directory",
        crate::consts::ENGINE_DIR_ENV
      ),
    })
  }
}
