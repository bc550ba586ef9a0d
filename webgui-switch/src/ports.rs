//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use webgui_utils::SelectOptions;

use crate::driver::{PortInfo, SwitchDriver, SwitchInfo};

// Lazy sequence of the ports of a switch device that are enabled and that
// the driver can describe.
//
// Every port is queried when the iterator reaches it; nothing is cached.
#[derive(Debug)]
pub struct ActivePorts<'a, D> {
    driver: &'a D,
    device: &'a str,
    info: &'a SwitchInfo,
    next: u32,
}

// ===== impl ActivePorts =====

impl<D> Iterator for ActivePorts<'_, D>
where
    D: SwitchDriver,
{
    type Item = PortInfo;

    fn next(&mut self) -> Option<PortInfo> {
        while self.next < self.info.nports {
            let port = self.next;
            self.next += 1;

            if !self.info.port_enabled(port) {
                continue;
            }
            if let Some(info) = self.driver.port(self.device, port) {
                return Some(info);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.info.nports.saturating_sub(self.next);
        (0, Some(remaining as usize))
    }
}

// ===== global functions =====

pub fn list_active_ports<'a, D: SwitchDriver>(
    driver: &'a D,
    device: &'a str,
    info: &'a SwitchInfo,
) -> ActivePorts<'a, D> {
    ActivePorts {
        driver,
        device,
        info,
        next: 0,
    }
}

// Picks the device to show: the requested one if any, otherwise the first
// device found.
pub fn select_device(
    driver: &impl SwitchDriver,
    requested: Option<&str>,
) -> Option<String> {
    match requested.filter(|device| !device.is_empty()) {
        Some(device) => Some(device.to_owned()),
        None => driver.devices().into_iter().next(),
    }
}

// Choices of the device selector: devices whose information can be read,
// labeled with their switch name.
pub fn device_options(driver: &impl SwitchDriver) -> SelectOptions {
    driver
        .devices()
        .into_iter()
        .filter_map(|device| {
            let info = driver.info(&device)?;
            Some((device, info.name))
        })
        .collect()
}
