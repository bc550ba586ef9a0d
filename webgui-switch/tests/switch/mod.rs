//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod page;
mod patch;

use maplit::{btreemap, btreeset};
use serde_json::{Value, json};
use webgui_northbound::memory::MemoryStore;
use webgui_switch::driver::PortMedia;
use webgui_switch::testing::StaticSwitchDriver;
use webgui_switch::{PortInfo, PortStatus, SwitchInfo, VlanMode};

//
// Helper functions.
//

fn switch_config() -> Value {
    json!({
        "switches": {
            "switch": [
                {
                    "device": "/dev/etherswitch0",
                    "swports": {
                        "swport": [
                            { "port": "1", "pvid": "1" },
                            { "port": "3", "pvid": "30" }
                        ]
                    }
                }
            ]
        }
    })
}

fn store(config: Value) -> MemoryStore {
    MemoryStore::from_json(config)
}

fn port(port: u32, pvid: u16, status: &str) -> PortInfo {
    PortInfo {
        port,
        pvid,
        flags: vec!["HOST".to_owned(), "UP".to_owned()],
        media: Some(PortMedia {
            current: "Ethernet autoselect".to_owned(),
            active: Some("1000baseT <full-duplex>".to_owned()),
        }),
        status: PortStatus::from(status.to_owned()),
    }
}

fn info(name: &str, nports: u32, vlan_mode: VlanMode) -> SwitchInfo {
    SwitchInfo {
        name: name.to_owned(),
        nports,
        vlan_mode: Some(vlan_mode),
        disabled_ports: btreeset![2],
    }
}

fn driver() -> StaticSwitchDriver {
    StaticSwitchDriver {
        devices: vec![(
            "etherswitch0".to_owned(),
            Some(info("ukswitch0", 5, VlanMode::Dot1q)),
        )],
        ports: btreemap! {
            "etherswitch0".to_owned() => vec![
                port(0, 1, "active"),
                port(1, 1, "no carrier"),
                port(2, 1, "active"),
                port(3, 1, "active"),
            ],
        },
        port_names: btreemap! { 0 => "cpu".to_owned(), 1 => "lan1".to_owned() },
        title: "UFW".to_owned(),
        ..Default::default()
    }
}
