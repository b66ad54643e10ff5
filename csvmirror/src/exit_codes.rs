//! Stable exit codes for the `csvmirror` binary.
//!
//! Code 2 is left to clap for usage errors.

/// Every manifest entry was processed (some may have been skipped).
pub const OK: i32 = 0;
/// Run aborted by an I/O, manifest or process-launch failure.
pub const FAILURE: i32 = 1;
/// The manifest file or source root did not resolve to an existing path.
pub const NOT_FOUND: i32 = 3;
