//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use serde_json::Value;
use webgui_northbound::ConfigRepository;
use webgui_utils::SelectOptions;

use crate::debug::Debug;
use crate::driver::{PortInfo, SwitchDriver, SwitchInfo};
use crate::patch::{self, SWPORTS_PATH};
use crate::ports;

pub const DEVICE_FIELD: &str = "swdevice";
pub const DEVICE_ERROR: &str = "Cannot get switch device information";

// Request to the switch ports page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SwitchRequest {
    // Device chosen in the selector.
    pub device: Option<String>,
    // Posted PVID document.
    pub vids: Option<String>,
}

// Everything the switch ports page shows.
#[derive(Clone, Debug, Default)]
pub struct SwitchPage {
    pub title: String,
    // Selector choices; empty unless there is more than one device.
    pub devices: SelectOptions,
    pub device: Option<String>,
    pub info: Option<SwitchInfo>,
    pub errors: Vec<String>,
    // PVIDs were saved by this request.
    pub saved: bool,
    pub ports: Vec<PortRow>,
}

#[derive(Clone, Debug)]
pub struct PortRow {
    pub port: PortInfo,
    // Front-panel name, or the port number.
    pub name: String,
    // Stored PVID if any, otherwise the one reported by the switch.
    pub pvid: String,
}

// ===== impl SwitchRequest =====

impl SwitchRequest {
    // Parses the URL-encoded switch ports form.
    //
    // PVIDs are only picked up from AJAX-style submissions.
    pub fn from_form(form: &[(String, String)]) -> SwitchRequest {
        let value = |name: &str| {
            form.iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .filter(|value| !value.is_empty())
        };

        let ajax = value("ajax").is_some_and(|ajax| ajax == "ajax");
        SwitchRequest {
            device: value(DEVICE_FIELD),
            vids: value("vids").filter(|_| ajax),
        }
    }
}

// ===== global functions =====

// Runs one request against the switch ports page.
pub fn handle(
    store: &mut impl ConfigRepository,
    driver: &impl SwitchDriver,
    request: SwitchRequest,
) -> SwitchPage {
    let mut page = SwitchPage {
        title: driver.title(),
        ..Default::default()
    };

    if let Some(vids) = &request.vids {
        match patch::handle_patch(store, vids) {
            Ok(_) => page.saved = true,
            Err(error) => {
                error.log();
                page.errors.extend(error.messages());
            }
        }
    }

    if driver.devices().len() > 1 {
        page.devices = ports::device_options(driver);
    }

    page.device = ports::select_device(driver, request.device.as_deref());
    page.info = page.device.as_deref().and_then(|device| driver.info(device));
    match (&page.device, &page.info) {
        (Some(device), Some(_)) => Debug::DeviceSelected(device).log(),
        (device, None) => {
            Debug::DeviceUnavailable(device.as_deref().unwrap_or_default())
                .log();
            page.errors.push(DEVICE_ERROR.to_owned());
        }
        _ => (),
    }

    if page.errors.is_empty()
        && let (Some(device), Some(info)) = (&page.device, &page.info)
    {
        let pvids = stored_pvids(store);
        page.ports = ports::list_active_ports(driver, device, info)
            .map(|port| {
                let name = driver
                    .map_port(port.port)
                    .unwrap_or_else(|| port.port.to_string());
                let pvid = pvids
                    .get(&port.port.to_string())
                    .cloned()
                    .unwrap_or_else(|| port.pvid.to_string());
                PortRow { port, name, pvid }
            })
            .collect();
    }

    page
}

// PVIDs stored for the first switch, keyed by port.
pub fn stored_pvids(store: &impl ConfigRepository) -> BTreeMap<String, String> {
    let path = format!("{SWPORTS_PATH}/swport");
    let Some(Value::Array(swports)) = store.get(&path) else {
        return BTreeMap::new();
    };

    swports
        .iter()
        .filter_map(|swport| {
            let port = swport.get("port")?.as_str()?;
            let pvid = swport.get("pvid")?.as_str()?;
            Some((port.to_owned(), pvid.to_owned()))
        })
        .collect()
}
