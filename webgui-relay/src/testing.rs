//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use crate::interfaces::{CarpVip, ConfiguredInterface, InterfaceInventory};
use crate::model::RelayCfg;
use crate::service::RelayService;

// Fixed interface inventory.
#[derive(Clone, Debug, Default)]
pub struct StaticInventory {
    pub interfaces: Vec<ConfiguredInterface>,
    pub carp_vips: Vec<CarpVip>,
    // Real interface name prefixes of pseudo interfaces.
    pub pseudo_prefixes: Vec<String>,
}

// Relay service that records every reconfigure request.
#[derive(Clone, Debug, Default)]
pub struct RecordingService {
    pub calls: Vec<RelayCfg>,
    // Status returned to the caller.
    pub status: i32,
}

// ===== impl StaticInventory =====

impl InterfaceInventory for StaticInventory {
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

// ===== impl RecordingService =====

impl RelayService for RecordingService {
    fn reconfigure(&mut self, relay: &RelayCfg) -> i32 {
        self.calls.push(relay.clone());
        self.status
    }
}
