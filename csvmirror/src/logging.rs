//! Process log stream.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: lifecycle lines on stderr, filtered by `RUST_LOG`
//!   (default `info`). Audit lines carry the operator's IP and user name via
//!   [`LogContext`].
//!
//! - **Run log (`--log` file)**: verbatim mirror tool output, appended by
//!   [`crate::copy`]. Always written, unaffected by `RUST_LOG`.

use std::fmt::Display;
use std::io::IsTerminal;
use std::net::IpAddr;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::io::identity;

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `info` if unset.
/// Output: stderr, `<timestamp> <message>`, colored only when stderr is a terminal.
///
/// # Example
/// ```bash
/// RUST_LOG=csvmirror=debug csvmirror --csv folders.csv --src S: --dest D: --log copy.log
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_level(false),
        )
        .init();
}

/// Who is running the copy, attached to every audit line.
///
/// Built once at startup and passed by reference to whatever logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub client_ip: String,
    pub user: String,
}

impl LogContext {
    pub fn new(client_ip: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            client_ip: client_ip.into(),
            user: user.into(),
        }
    }

    /// Detect the local address and operator name.
    pub fn detect() -> Self {
        let ip: IpAddr = identity::client_ip();
        Self::new(ip.to_string(), identity::current_user())
    }

    /// Render `<client-ip> <user> <message>` with fixed-width columns.
    pub fn line(&self, message: impl Display) -> String {
        format!("{:<15} {:<8} {}", self.client_ip, self.user, message)
    }

    pub fn info(&self, message: impl Display) {
        info!("{}", self.line(message));
    }

    pub fn warn(&self, message: impl Display) {
        warn!("{}", self.line(message));
    }

    pub fn error(&self, message: impl Display) {
        error!("{}", self.line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_pads_ip_and_user_columns() {
        let log = LogContext::new("10.0.0.7", "ops");
        assert_eq!(log.line("Copy Path: A/B"), "10.0.0.7        ops      Copy Path: A/B");
    }

    #[test]
    fn line_keeps_long_values_intact() {
        let log = LogContext::new("fe80::1ff:fe23:4567:890a", "administrator");
        assert_eq!(
            log.line("Done Path: C"),
            "fe80::1ff:fe23:4567:890a administrator Done Path: C"
        );
    }
}
