//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod render;

use const_addrs::{ip, ip6};
use serde_json::{Value, json};
use webgui_northbound::memory::MemoryStore;
use webgui_relay::interfaces::{CarpVip, ConfiguredInterface};
use webgui_relay::testing::StaticInventory;

//
// Helper functions.
//

fn fields(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn store(config: Value) -> MemoryStore {
    MemoryStore::from_json(config)
}

fn base_config() -> Value {
    json!({
        "interfaces": {
            "lan": { "descr": "LAN", "if": "em1", "enable": true },
            "opt1": { "descr": "DMZ", "if": "em2", "enable": true }
        },
        "dhcpdv6": {
            "lan": { "range": { "from": "2001:db8::100" } }
        }
    })
}

fn inventory() -> StaticInventory {
    StaticInventory {
        interfaces: vec![
            ConfiguredInterface::new(
                "wan".to_owned(),
                "WAN".to_owned(),
                "em0".to_owned(),
                None,
            ),
            ConfiguredInterface::new(
                "lan".to_owned(),
                "LAN".to_owned(),
                "em1".to_owned(),
                Some(ip6!("2001:db8:1::1")),
            ),
            ConfiguredInterface::new(
                "opt1".to_owned(),
                "DMZ".to_owned(),
                "em2".to_owned(),
                Some(ip6!("2001:db8:2::1")),
            ),
            ConfiguredInterface::new(
                "opt2".to_owned(),
                "TUNNEL".to_owned(),
                "gif0".to_owned(),
                Some(ip6!("2001:db8:3::1")),
            ),
        ],
        carp_vips: vec![
            CarpVip::new(
                "_vip1".to_owned(),
                "LAN CARP".to_owned(),
                "em1".to_owned(),
                Some(ip!("2001:db8:1::1")),
            ),
            CarpVip::new(
                "_vip2".to_owned(),
                "WAN CARP".to_owned(),
                "em0".to_owned(),
                None,
            ),
            CarpVip::new(
                "_vip3".to_owned(),
                "GIF CARP".to_owned(),
                "gif0".to_owned(),
                Some(ip!("2001:db8:3::1")),
            ),
        ],
        pseudo_prefixes: vec!["gif".to_owned(), "lo".to_owned()],
    }
}
