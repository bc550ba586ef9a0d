//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeSet;

use serde::Deserialize;

// Switch device information.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchInfo {
    pub name: String,
    pub nports: u32,
    #[serde(default)]
    pub vlan_mode: Option<VlanMode>,
    // Ports administratively disabled at the switch level.
    #[serde(default)]
    pub disabled_ports: BTreeSet<u32>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
#[serde(from = "String")]
pub enum VlanMode {
    Port,
    Dot1q,
    Other(String),
}

// Live port state.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortInfo {
    pub port: u32,
    pub pvid: u16,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub media: Option<PortMedia>,
    pub status: PortStatus,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortMedia {
    pub current: String,
    #[serde(default)]
    pub active: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
#[serde(from = "String")]
pub enum PortStatus {
    Active,
    NoCarrier,
    Other(String),
}

// Access to the Ethernet switch devices.
pub trait SwitchDriver {
    // Names of the switch devices, in enumeration order.
    fn devices(&self) -> Vec<String>;

    fn info(&self, device: &str) -> Option<SwitchInfo>;

    // Queries the current state of a port. Returns `None` if the port can't
    // be described.
    fn port(&self, device: &str, port: u32) -> Option<PortInfo>;

    // Front-panel name of a port, if it has one.
    fn map_port(&self, port: u32) -> Option<String>;

    // Switch model, shown in the page heading.
    fn title(&self) -> String;
}

// ===== impl SwitchInfo =====

impl SwitchInfo {
    pub fn port_enabled(&self, port: u32) -> bool {
        !self.disabled_ports.contains(&port)
    }

    // Port VLAN IDs are only meaningful in 802.1Q mode.
    pub fn dot1q(&self) -> bool {
        self.vlan_mode == Some(VlanMode::Dot1q)
    }
}

// ===== impl VlanMode =====

impl From<String> for VlanMode {
    fn from(mode: String) -> VlanMode {
        match mode.as_str() {
            "PORT" => VlanMode::Port,
            "DOT1Q" => VlanMode::Dot1q,
            _ => VlanMode::Other(mode),
        }
    }
}

impl std::fmt::Display for VlanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VlanMode::Port => write!(f, "PORT"),
            VlanMode::Dot1q => write!(f, "DOT1Q"),
            VlanMode::Other(mode) => write!(f, "{mode}"),
        }
    }
}

// ===== impl PortStatus =====

impl PortStatus {
    // CSS class of the status cell.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            PortStatus::Active => Some("text-success"),
            PortStatus::NoCarrier => Some("text-danger"),
            PortStatus::Other(..) => None,
        }
    }
}

impl From<String> for PortStatus {
    fn from(status: String) -> PortStatus {
        match status.to_lowercase().as_str() {
            "active" => PortStatus::Active,
            "no carrier" => PortStatus::NoCarrier,
            _ => PortStatus::Other(status),
        }
    }
}

impl std::fmt::Display for PortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortStatus::Active => write!(f, "active"),
            PortStatus::NoCarrier => write!(f, "no carrier"),
            PortStatus::Other(status) => write!(f, "{status}"),
        }
    }
}

// ===== impl PortMedia =====

impl std::fmt::Display for PortMedia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current)?;
        if let Some(active) = &self.active {
            write!(f, " ({active})")?;
        }
        Ok(())
    }
}
