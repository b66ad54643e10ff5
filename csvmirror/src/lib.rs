//! Bulk folder copier driven by a CSV manifest.
//!
//! Each manifest row names a folder relative to both a source and a
//! destination root. Folders are mirrored one at a time by an external tool
//! (by default `robocopy /mir`), whose output is appended to a run log. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (lexical path normalization).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (path existence, manifest reading,
//!   process execution, configuration). Isolated to enable fakes in tests.
//!
//! Orchestration modules ([`context`], [`copy`]) coordinate core logic with
//! I/O to implement the CLI.

pub mod context;
pub mod copy;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
