//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Range of usable IEEE 802.1Q VLAN identifiers. VID 0 (priority tagged) and
// VID 4095 are reserved.
pub const VLAN_TAG_MIN: u16 = 1;
pub const VLAN_TAG_MAX: u16 = 4094;

// Parses a VLAN tag given in decimal notation. Signs, whitespace and other
// non-digit characters are rejected.
pub fn parse_vlan_tag(tag: &str) -> Option<u16> {
    if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Leading zeros are allowed, overlong values are not.
    let tag = tag.trim_start_matches('0');
    if tag.len() > 4 {
        return None;
    }
    let tag = tag.parse::<u16>().unwrap_or(0);
    (VLAN_TAG_MIN..=VLAN_TAG_MAX).contains(&tag).then_some(tag)
}

// Returns true if the given string is a valid VLAN tag.
pub fn vlan_valid_tag(tag: &str) -> bool {
    parse_vlan_tag(tag).is_some()
}
