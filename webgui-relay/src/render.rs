//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use webgui_utils::html::{self, BoxClass};

use crate::controller::{RelayForm, RelayView};
use crate::model::field;

pub const PAGE: &str = "/services_dhcpv6_relay.php";

const TITLE: &[&str] = &["Services", "DHCPv6 Relay"];
const SERVER_ACTIVE_NOTICE: &str = "DHCPv6 Server is currently enabled. \
    Cannot enable the DHCPv6 Relay service while the DHCPv6 Server is \
    enabled on any interface.";
const INTERFACE_HELP: &str =
    "Interfaces without an IPv6 address will not be shown.";
const CARP_HELP: &str = "Used to determine the HA MASTER/BACKUP status. \
    DHCPv6 Relay will be stopped when the chosen VIP is in BACKUP status, \
    and started in MASTER status.";
const SERVER_HELP: &str = "This is the IPv6 address of the server to which \
    DHCPv6 requests are relayed.";

// ===== global functions =====

pub fn render(view: &RelayView, csrf_token: &str) -> String {
    let mut page = html::head(TITLE);
    match view {
        RelayView::Blocked => {
            page.push_str(&html::info_box(
                SERVER_ACTIVE_NOTICE,
                BoxClass::Danger,
                false,
            ));
        }
        RelayView::Form(form) => render_form(&mut page, form, csrf_token),
    }
    page.push_str(&html::foot());
    page
}

// ===== helper functions =====

fn render_form(page: &mut String, form: &RelayForm, csrf_token: &str) {
    if !form.errors.is_empty() {
        page.push_str(&html::input_errors(&form.errors));
    }
    if let Some(outcome) = &form.outcome {
        match outcome.status {
            Some(status) => page.push_str(&html::apply_result_box(status)),
            None => {
                let message = outcome.apply_error.as_deref().unwrap_or_default();
                page.push_str(&html::info_box(message, BoxClass::Danger, true));
            }
        }
    }

    let config = &form.config;
    page.push_str(&html::form_open(PAGE, csrf_token));
    page.push_str("<h2>DHCPv6 Relay Configuration</h2>\n");
    page.push_str(&html::checkbox(
        field::ENABLE,
        "Enable",
        "Enable DHCPv6 Relay on interface",
        config.enabled,
    ));
    page.push_str(&html::select(
        field::INTERFACE,
        "*Interface(s)",
        &config.interfaces,
        &form.interfaces,
        true,
        Some(INTERFACE_HELP),
    ));
    page.push_str(&html::select(
        field::CARP_STATUS_VIP,
        "*CARP Status VIP",
        std::slice::from_ref(&config.carp_status_vip),
        &form.carp_vips,
        false,
        Some(CARP_HELP),
    ));
    page.push_str(&html::checkbox(
        field::AGENT_OPTION,
        "",
        "Append circuit ID and agent ID to requests",
        config.agent_option,
    ));

    // One input group per destination server, or a single empty one.
    let servers = match config.servers.is_empty() {
        true => vec![""],
        false => config.servers.iter().map(String::as_str).collect(),
    };
    for (i, server) in servers.into_iter().enumerate() {
        page.push_str(&html::text_input(
            &format!("{}[{i}][]", field::SERVER),
            "*Destination server",
            server,
            Some(SERVER_HELP),
        ));
    }
    page.push_str(&html::form_close());
}
