//! uebuild-lib: locate an Unreal Engine project's build tool and drive it.
//!
//! The pieces, in pipeline order:
//! - `descriptor`: find the `.uproject` file and read the project name from it
//! - `toolchain`: find `UnrealBuildTool` through an installation locator
//! - `cleanup`: delete cached build artifacts before a rebuild
//! - `build`: run the build tool and stream its output
//! - `pipeline`: chain the stages into the build and rebuild workflows
//!
//! All user-facing text goes through a [`sink::OutputSink`].

pub mod build;
pub mod cleanup;
pub mod config;
pub mod consts;
pub mod descriptor;
pub mod pipeline;
pub mod sink;
pub mod toolchain;
pub mod util;
