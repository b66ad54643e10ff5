//! I/O helpers for the copier.

pub mod config;
pub mod executor;
pub mod identity;
pub mod manifest;
pub mod process;
pub mod resolve;
