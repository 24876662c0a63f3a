//! Local IP discovery.
//!
//! Interfaces come from `sysinfo`; on Linux-like systems the up/loopback
//! flags are read from `/sys/class/net/<iface>/flags`.

use crate::core::system_info::types::LocalAddress;
use crate::error::{FetchError, Result};
use crate::platform::fs::read_trimmed;
use std::net::IpAddr;
use std::path::Path;
use sysinfo::Networks;

const IFF_UP: u32 = 0x1;
const IFF_LOOPBACK: u32 = 0x8;

pub const SYS_CLASS_NET: &str = "/sys/class/net";

/// A network interface with its textual addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddrs {
    pub name: String,
    pub is_up: bool,
    pub is_loopback: bool,
    /// Either plain addresses or CIDR `addr/prefix` strings
    pub addrs: Vec<String>,
}

/// Parse an address in plain or CIDR notation
pub fn parse_addr(text: &str) -> Option<IpAddr> {
    let text = text.trim();
    let addr = match text.split_once('/') {
        Some((addr, prefix)) => {
            prefix.parse::<u8>().ok()?;
            addr
        }
        None => text,
    };
    addr.parse().ok()
}

/// First IPv4 address on an interface that is up and not loopback
pub fn first_ipv4(interfaces: &[InterfaceAddrs]) -> Option<LocalAddress> {
    interfaces
        .iter()
        .filter(|iface| iface.is_up && !iface.is_loopback)
        .find_map(|iface| {
            iface.addrs.iter().find_map(|text| match parse_addr(text)? {
                IpAddr::V4(addr) => Some(LocalAddress {
                    interface: iface.name.clone(),
                    addr,
                }),
                IpAddr::V6(v6) => v6.to_ipv4_mapped().map(|addr| LocalAddress {
                    interface: iface.name.clone(),
                    addr,
                }),
            })
        })
}

/// Read `up`/`loopback` from a sysfs `flags` file (hex, e.g. `0x1003`)
pub fn read_sysfs_flags(net_dir: &Path, name: &str) -> Option<(bool, bool)> {
    let raw = read_trimmed(net_dir.join(name).join("flags")).ok()?;
    let flags = u32::from_str_radix(raw.trim_start_matches("0x"), 16).ok()?;
    Some((flags & IFF_UP != 0, flags & IFF_LOOPBACK != 0))
}

/// Enumerate interfaces through `sysinfo`.
///
/// With `flags_dir` set, flags come from sysfs; otherwise every listed
/// interface counts as up and loopback is inferred from its addresses.
pub fn list_interfaces(flags_dir: Option<&Path>) -> Vec<InterfaceAddrs> {
    let networks = Networks::new_with_refreshed_list();
    let mut interfaces: Vec<InterfaceAddrs> = networks
        .list()
        .iter()
        .map(|(name, data)| {
            let addrs: Vec<String> = data
                .ip_networks()
                .iter()
                .map(|net| format!("{}/{}", net.addr, net.prefix))
                .collect();
            let inferred_loopback = !data.ip_networks().is_empty()
                && data.ip_networks().iter().all(|net| net.addr.is_loopback());
            let (is_up, is_loopback) = flags_dir
                .and_then(|dir| read_sysfs_flags(dir, name))
                .unwrap_or((true, inferred_loopback));

            InterfaceAddrs {
                name: name.clone(),
                is_up,
                is_loopback,
                addrs,
            }
        })
        .collect();

    // The library hands interfaces back in hash order
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    interfaces
}

pub fn local_ip(flags_dir: Option<&Path>) -> Result<LocalAddress> {
    let interfaces = list_interfaces(flags_dir);
    first_ipv4(&interfaces).ok_or_else(|| FetchError::not_found("IPv4 address on an active interface"))
}
