//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Interfaces: Switch: Ports.
//!
//! Lists the ports of the Ethernet switch devices and lets the user edit the
//! port VLAN IDs. New PVIDs arrive as a single JSON document; any invalid
//! entry rejects the whole document.

mod debug;

pub mod driver;
pub mod page;
pub mod patch;
pub mod ports;
pub mod render;
#[cfg(feature = "testing")]
pub mod testing;

pub use crate::driver::{PortInfo, PortStatus, SwitchDriver, SwitchInfo, VlanMode};
pub use crate::page::{SwitchPage, SwitchRequest, handle};
pub use crate::patch::{PatchError, PatchOutcome, handle_patch};
