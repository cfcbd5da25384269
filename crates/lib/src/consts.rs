//! Fixed names and literals shared across the crate.

/// File extension of the project descriptor, without the dot.
pub const DESCRIPTOR_EXTENSION: &str = "uproject";

/// Registry key (under HKLM) listing launcher-installed engine versions.
pub const REGISTRY_KEY: &str = r"SOFTWARE\EpicGames\Unreal Engine";

/// Registry value holding an installation's root directory.
pub const INSTALL_DIRECTORY_VALUE: &str = "InstalledDirectory";

#[cfg(windows)]
pub const BUILD_TOOL_NAME: &str = "UnrealBuildTool.exe";

#[cfg(not(windows))]
pub const BUILD_TOOL_NAME: &str = "UnrealBuildTool";

/// Location of the build tool relative to an installation root.
pub const BUILD_TOOL_SUBPATH: [&str; 4] = ["Engine", "Binaries", "DotNET", "UnrealBuildTool"];

/// Appended to the module name to form the editor target.
pub const EDITOR_TARGET_SUFFIX: &str = "Editor";

pub const DEFAULT_CONFIGURATION: &str = "Development";
pub const DEFAULT_PLATFORM: &str = "Win64";

/// Cache directories removed before a rebuild, relative to the project root.
pub const CACHE_DIRECTORIES: [&str; 5] = [".vs", "Binaries", "Build", "Intermediate", "DerivedDataCache"];

/// Environment variable naming an engine installation to use instead of the registry.
pub const ENGINE_DIR_ENV: &str = "UEBUILD_ENGINE_DIR";

/// Environment variable that disables the acknowledgement prompt when set.
pub const NO_PAUSE_ENV: &str = "UEBUILD_NO_PAUSE";
