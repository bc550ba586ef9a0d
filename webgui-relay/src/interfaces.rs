//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::{IpAddr, Ipv6Addr};

use derive_new::new;
use webgui_utils::SelectOptions;

use crate::model::CARP_VIP_NONE;

// Interface assigned in the configuration.
#[derive(Clone, Debug, Eq, PartialEq, new)]
pub struct ConfiguredInterface {
    // Friendly identifier ("lan", "opt1", ...).
    pub id: String,
    pub descr: String,
    // Operating system interface name.
    pub real_ifname: String,
    // Current IPv6 address, if any.
    pub ipv6: Option<Ipv6Addr>,
}

// CARP virtual IP with an IPv6 address.
#[derive(Clone, Debug, Eq, PartialEq, new)]
pub struct CarpVip {
    // VIP identifier, as referenced by `dhcrelay6/carpstatusvip`.
    pub id: String,
    pub descr: String,
    // Operating system name of the interface the VIP lives on.
    pub real_ifname: String,
    // Current address of that interface, if any.
    pub parent_address: Option<IpAddr>,
}

// Source of the interfaces the relay can be bound to.
pub trait InterfaceInventory {
    // Configured interfaces, in display order.
    fn configured_interfaces(&self) -> Vec<ConfiguredInterface>;

    // Configured IPv6 CARP VIPs, in display order.
    fn carp_vips(&self) -> Vec<CarpVip>;

    // Returns true for interfaces that can't carry relayed traffic (tunnels,
    // loopback, ...).
    fn is_pseudo_interface(&self, real_ifname: &str) -> bool;
}

// ===== global functions =====

// Interfaces the relay can listen on: those with an IPv6 address that aren't
// pseudo interfaces.
pub fn eligible_interfaces(inventory: &impl InterfaceInventory) -> SelectOptions {
    inventory
        .configured_interfaces()
        .into_iter()
        .filter(|iface| iface.ipv6.is_some())
        .filter(|iface| !inventory.is_pseudo_interface(&iface.real_ifname))
        .map(|iface| (iface.id, iface.descr))
        .collect()
}

// CARP VIPs the relay can track, preceded by the "none" choice.
pub fn eligible_carp_vips(inventory: &impl InterfaceInventory) -> SelectOptions {
    let none = (CARP_VIP_NONE.to_owned(), CARP_VIP_NONE.to_owned());
    std::iter::once(none)
        .chain(
            inventory
                .carp_vips()
                .into_iter()
                .filter(|vip| vip.parent_address.is_some())
                .filter(|vip| !inventory.is_pseudo_interface(&vip.real_ifname))
                .map(|vip| (vip.id, vip.descr)),
        )
        .collect()
}
