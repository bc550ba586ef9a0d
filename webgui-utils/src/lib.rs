//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod html;
pub mod ip;
pub mod vlan;

// Ordered list of (value, label) pairs used to populate select controls.
pub type SelectOptions = Vec<(String, String)>;
