//! Shared utilities.
//!
//! The first-match directory walker used by descriptor and build-tool discovery, plus test helpers.

pub mod walk;

#[cfg(test)]
pub mod testutil;
