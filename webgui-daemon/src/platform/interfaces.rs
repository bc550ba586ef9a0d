//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv6Addr, SocketAddrV4, SocketAddrV6};

use nix::ifaddrs;
use serde_json::Value;
use tracing::warn;
use webgui_northbound::ConfigTree;
use webgui_northbound::tree::value_enabled;
use webgui_relay::interfaces::{CarpVip, ConfiguredInterface, InterfaceInventory};
use webgui_utils::ip;

// Interface inventory built from the stored interface assignments and the
// addresses currently configured on the system.
#[derive(Debug, Default)]
pub struct ConfigInterfaces {
    interfaces: Vec<ConfiguredInterface>,
    carp_vips: Vec<CarpVip>,
    pseudo_prefixes: Vec<String>,
}

// Addresses currently assigned, keyed by interface name.
pub type LiveAddresses = BTreeMap<String, Vec<IpAddr>>;

// ===== impl ConfigInterfaces =====

impl ConfigInterfaces {
    // Takes a snapshot of the interfaces.
    pub fn load(running: &ConfigTree, pseudo_prefixes: &[String]) -> Self {
        Self::with_addresses(running, pseudo_prefixes, &live_addresses())
    }

    pub fn with_addresses(
        running: &ConfigTree,
        pseudo_prefixes: &[String],
        live: &LiveAddresses,
    ) -> Self {
        let config = running.as_value();
        let mut interfaces = vec![];
        let mut parents = BTreeMap::new();

        let assigned = config.get("interfaces").and_then(Value::as_object);
        for (id, iface) in assigned.into_iter().flatten() {
            let Some(real_ifname) = iface.get("if").and_then(Value::as_str)
            else {
                continue;
            };
            let addrs = live
                .get(real_ifname)
                .map(Vec::as_slice)
                .unwrap_or_default();

            // Static address first, then the global addresses found on the
            // system.
            let ipv6 = iface
                .get("ipaddrv6")
                .and_then(Value::as_str)
                .and_then(ip::parse_ipv6_literal)
                .or_else(|| addrs.iter().find_map(global_ipv6));
            let ipv4 = iface
                .get("ipaddr")
                .and_then(Value::as_str)
                .and_then(|addr| addr.parse().ok())
                .or_else(|| addrs.iter().copied().find(IpAddr::is_ipv4));
            parents.insert(
                id.clone(),
                (real_ifname.to_owned(), ipv4.or(ipv6.map(IpAddr::V6))),
            );

            if !iface.get("enable").is_some_and(value_enabled) {
                continue;
            }
            let descr = iface
                .get("descr")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| id.to_uppercase());
            interfaces.push(ConfiguredInterface::new(
                id.clone(),
                descr,
                real_ifname.to_owned(),
                ipv6,
            ));
        }

        let vips = config
            .get("virtualip")
            .and_then(|vip| vip.get("vip"))
            .and_then(Value::as_array);
        let carp_vips = vips
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, vip)| carp_vip(index, vip, &parents))
            .collect();

        ConfigInterfaces {
            interfaces,
            carp_vips,
            pseudo_prefixes: pseudo_prefixes.to_vec(),
        }
    }
}

impl InterfaceInventory for ConfigInterfaces {
    fn configured_interfaces(&self) -> Vec<ConfiguredInterface> {
        self.interfaces.clone()
    }

    fn carp_vips(&self) -> Vec<CarpVip> {
        self.carp_vips.clone()
    }

    fn is_pseudo_interface(&self, real_ifname: &str) -> bool {
        self.pseudo_prefixes
            .iter()
            .any(|prefix| real_ifname.starts_with(prefix.as_str()))
    }
}

// ===== helper functions =====

fn live_addresses() -> LiveAddresses {
    let mut addresses = LiveAddresses::new();

    let ifaddrs = match ifaddrs::getifaddrs() {
        Ok(ifaddrs) => ifaddrs,
        Err(error) => {
            warn!(%error, "failed to list interface addresses");
            return addresses;
        }
    };
    for ifaddr in ifaddrs {
        let Some(sa) = ifaddr.address else {
            continue;
        };
        let addr = sa
            .as_sockaddr_in()
            .map(|sa| IpAddr::from(*SocketAddrV4::from(*sa).ip()))
            .or_else(|| {
                sa.as_sockaddr_in6()
                    .map(|sa| IpAddr::from(*SocketAddrV6::from(*sa).ip()))
            });
        if let Some(addr) = addr {
            addresses.entry(ifaddr.interface_name).or_default().push(addr);
        }
    }

    addresses
}

fn global_ipv6(addr: &IpAddr) -> Option<Ipv6Addr> {
    match addr {
        IpAddr::V6(addr)
            if !addr.is_unicast_link_local() && !addr.is_loopback() =>
        {
            Some(*addr)
        }
        _ => None,
    }
}

// Builds a CARP VIP from its stored definition. Only IPv6 CARP VIPs are
// considered.
fn carp_vip(
    index: usize,
    vip: &Value,
    parents: &BTreeMap<String, (String, Option<IpAddr>)>,
) -> Option<CarpVip> {
    let field = |name: &str| vip.get(name).and_then(Value::as_str);

    if field("mode")? != "carp" {
        return None;
    }
    let subnet = field("subnet")?;
    if !ip::is_ipaddrv6(subnet) {
        return None;
    }
    let (real_ifname, parent_address) = parents.get(field("interface")?)?;

    let id = match field("uniqid") {
        Some(uniqid) => format!("_vip{uniqid}"),
        None => format!("_vip{index}"),
    };
    let descr = match field("descr").filter(|descr| !descr.is_empty()) {
        Some(descr) => format!("{subnet} ({descr})"),
        None => subnet.to_owned(),
    };

    Some(CarpVip::new(id, descr, real_ifname.clone(), *parent_address))
}
