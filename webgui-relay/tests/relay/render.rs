//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;
use webgui_relay::render::render;
use webgui_relay::testing::RecordingService;
use webgui_relay::{RelayRequest, RelayView, handle_request};

use super::{base_config, fields, inventory, store};

#[test]
fn test_render_blocked() {
    let html = render(&RelayView::Blocked, "token");

    assert!(html.contains("DHCPv6 Server is currently enabled."));
    assert!(!html.contains("<form"));
}

#[test]
fn test_render_stored_settings() {
    let mut config = base_config();
    config["dhcrelay6"] = json!({
        "enable": true,
        "interface": "lan",
        "server": "2001:db8::1,fe80::2",
        "carpstatusvip": "_vip1"
    });
    let view = handle_request(
        &mut store(config),
        &inventory(),
        &mut RecordingService::default(),
        RelayRequest::Get,
    );
    let html = render(&view, "token");

    assert!(html.contains("name=\"__csrf_magic\" value=\"token\""));
    assert!(html.contains("name=\"enable\" value=\"yes\" checked"));
    assert!(html.contains("name=\"agentoption\" value=\"yes\">"));
    assert!(html.contains("<option value=\"lan\" selected>LAN</option>"));
    assert!(html.contains("<option value=\"opt1\">DMZ</option>"));
    assert!(html.contains("<option value=\"_vip1\" selected>LAN CARP</option>"));
    assert!(html.contains("name=\"server[0][]\" value=\"2001:db8::1\""));
    assert!(html.contains("name=\"server[1][]\" value=\"fe80::2\""));
    assert!(!html.contains("input-errors"));
}

#[test]
fn test_render_empty_server_group() {
    let view = handle_request(
        &mut store(base_config()),
        &inventory(),
        &mut RecordingService::default(),
        RelayRequest::Get,
    );
    let html = render(&view, "token");

    assert!(html.contains("name=\"server[0][]\" value=\"\""));
    assert!(!html.contains("server[1]"));
}

#[test]
fn test_render_errors_and_result() {
    let mut store = store(base_config());
    let mut service = RecordingService::default();

    let request = RelayRequest::Post(fields(&[
        ("enable", "yes"),
        ("interface[]", "lan"),
        ("server[0][]", "<script>"),
    ]));
    let view = handle_request(&mut store, &inventory(), &mut service, request);
    let html = render(&view, "token");
    assert!(html.contains("The following input errors were detected:"));
    assert!(html.contains("Destination Server IP address &lt;script&gt;"));
    assert!(!html.contains("<script>"));

    let request = RelayRequest::Post(fields(&[
        ("enable", "yes"),
        ("interface[]", "lan"),
        ("server[0][]", "2001:db8::1"),
    ]));
    let view = handle_request(&mut store, &inventory(), &mut service, request);
    let html = render(&view, "token");
    assert!(html.contains("The changes have been applied successfully."));
}
