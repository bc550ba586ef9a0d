//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::process::Command;

use tracing::{debug, error};
use webgui_relay::{RelayCfg, RelayService};

// Relay service control through an external command.
//
// The settings are handed over in `DHCRELAY6_*` environment variables.
#[derive(Debug)]
pub struct CommandServiceControl<'a> {
    command: &'a [String],
}

// ===== impl CommandServiceControl =====

impl<'a> CommandServiceControl<'a> {
    pub fn new(command: &'a [String]) -> Self {
        CommandServiceControl { command }
    }
}

impl RelayService for CommandServiceControl<'_> {
    fn reconfigure(&mut self, relay: &RelayCfg) -> i32 {
        let Some((program, args)) = self.command.split_first() else {
            error!("relay reconfigure command not configured");
            return 1;
        };

        let flag = |value: bool| if value { "yes" } else { "no" };
        let result = Command::new(program)
            .args(args)
            .env("DHCRELAY6_ENABLE", flag(relay.enabled))
            .env("DHCRELAY6_INTERFACES", relay.interface_list())
            .env("DHCRELAY6_SERVERS", relay.server_list())
            .env("DHCRELAY6_AGENTOPTION", flag(relay.agent_option))
            .env("DHCRELAY6_CARPSTATUSVIP", &relay.carp_status_vip)
            .status();

        match result {
            Ok(status) => {
                debug!(%program, %status, "relay reconfigure command finished");
                // Termination by signal counts as failure.
                status.code().unwrap_or(1)
            }
            Err(error) => {
                error!(%program, %error, "failed to run relay reconfigure command");
                1
            }
        }
    }
}
