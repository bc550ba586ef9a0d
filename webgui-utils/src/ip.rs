//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv6Addr;

// Parses an IPv6 address literal.
//
// A zone identifier suffix ("fe80::1%em0") is accepted only on link-local
// unicast addresses, and the zone itself must not be empty.
pub fn parse_ipv6_literal(literal: &str) -> Option<Ipv6Addr> {
    match literal.split_once('%') {
        Some((addr, zone)) => {
            let addr = addr.parse::<Ipv6Addr>().ok()?;
            (!zone.is_empty() && addr.is_unicast_link_local()).then_some(addr)
        }
        None => literal.parse().ok(),
    }
}

// Returns true if the given string is a valid IPv6 address literal.
pub fn is_ipaddrv6(literal: &str) -> bool {
    parse_ipv6_literal(literal).is_some()
}
