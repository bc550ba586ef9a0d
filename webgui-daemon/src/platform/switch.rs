//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;
use webgui_switch::{PortInfo, SwitchDriver, SwitchInfo};

// Switch driver reading the device state from a JSON snapshot.
//
// The snapshot is read again on every query, so the pages always show the
// state last written by the switch agent.
#[derive(Debug)]
pub struct SnapshotSwitchDriver {
    path: PathBuf,
    port_names: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Snapshot {
    title: String,
    devices: Vec<SnapshotDevice>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotDevice {
    device: String,
    info: SwitchInfo,
    #[serde(default)]
    ports: Vec<PortInfo>,
}

// ===== impl SnapshotSwitchDriver =====

impl SnapshotSwitchDriver {
    pub fn new(
        path: impl Into<PathBuf>,
        port_names: BTreeMap<String, String>,
    ) -> Self {
        SnapshotSwitchDriver {
            path: path.into(),
            port_names,
        }
    }

    fn snapshot(&self) -> Snapshot {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to read switch state");
                return Snapshot::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to parse switch state");
                Snapshot::default()
            }
        }
    }

    fn device(&self, device: &str) -> Option<SnapshotDevice> {
        self.snapshot()
            .devices
            .into_iter()
            .find(|entry| entry.device == device)
    }
}

impl SwitchDriver for SnapshotSwitchDriver {
    fn devices(&self) -> Vec<String> {
        self.snapshot()
            .devices
            .into_iter()
            .map(|entry| entry.device)
            .collect()
    }

    fn info(&self, device: &str) -> Option<SwitchInfo> {
        self.device(device).map(|entry| entry.info)
    }

    fn port(&self, device: &str, port: u32) -> Option<PortInfo> {
        self.device(device)?
            .ports
            .into_iter()
            .find(|info| info.port == port)
    }

    fn map_port(&self, port: u32) -> Option<String> {
        self.port_names.get(&port.to_string()).cloned()
    }

    fn title(&self) -> String {
        self.snapshot().title
    }
}
