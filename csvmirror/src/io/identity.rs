//! Host and operator identity for audit-decorated log lines.

use std::env;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

/// Variables consulted for the operator name, in order.
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Operator name from the first non-empty of [`USER_VARS`], else `unknown`.
pub fn current_user() -> String {
    user_from(|key| env::var(key).ok())
}

fn user_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    USER_VARS
        .iter()
        .filter_map(|&key| lookup(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Best-effort host name, without a resolver round trip.
pub fn host_name() -> Option<String> {
    ["HOSTNAME", "COMPUTERNAME"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .chain(fs::read_to_string("/etc/hostname").ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Address the host name resolves to, preferring IPv4. Falls back to loopback.
pub fn client_ip() -> IpAddr {
    let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let Some(host) = host_name() else {
        return loopback;
    };
    let Ok(addrs) = (host.as_str(), 0).to_socket_addrs() else {
        return loopback;
    };
    let addrs: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .unwrap_or(loopback)
}
