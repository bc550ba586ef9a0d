//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::driver::{PortInfo, SwitchDriver, SwitchInfo};

// Switch driver serving fixed device and port data.
#[derive(Debug, Default)]
pub struct StaticSwitchDriver {
    // Devices in enumeration order. Devices without information simulate
    // read failures.
    pub devices: Vec<(String, Option<SwitchInfo>)>,
    // Ports of every device.
    pub ports: BTreeMap<String, Vec<PortInfo>>,
    pub port_names: BTreeMap<u32, String>,
    pub title: String,
    // Number of port queries served so far.
    pub port_queries: Cell<usize>,
}

// ===== impl StaticSwitchDriver =====

impl SwitchDriver for StaticSwitchDriver {
    fn devices(&self) -> Vec<String> {
        self.devices.iter().map(|(device, _)| device.clone()).collect()
    }

    fn info(&self, device: &str) -> Option<SwitchInfo> {
        self.devices
            .iter()
            .find(|(name, _)| name == device)
            .and_then(|(_, info)| info.clone())
    }

    fn port(&self, device: &str, port: u32) -> Option<PortInfo> {
        self.port_queries.set(self.port_queries.get() + 1);
        self.ports
            .get(device)?
            .iter()
            .find(|info| info.port == port)
            .cloned()
    }

    fn map_port(&self, port: u32) -> Option<String> {
        self.port_names.get(&port).cloned()
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}
