//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use crate::model::RelayCfg;

// Control of the DHCPv6 relay daemon.
pub trait RelayService {
    // Restarts, reconfigures or stops the relay according to the given
    // settings. Returns zero on success.
    fn reconfigure(&mut self, relay: &RelayCfg) -> i32;
}
