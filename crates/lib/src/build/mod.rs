//! Build-tool orchestration.
//!
//! The build tool is an opaque subprocess. It is launched with its stdout piped, every output line
//! is forwarded to an [`OutputSink`](crate::sink::OutputSink) while the process is still running,
//! and its exit status decides the outcome.

mod session;
mod types;

pub use session::BuildSession;
pub use types::{BuildError, BuildInvocation, BuildStep, BuildSummary};
