//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use webgui_northbound::ConfigRepository;
use webgui_switch::page::DEVICE_ERROR;
use webgui_switch::render::render;
use webgui_switch::{SwitchRequest, VlanMode, handle};

use super::{driver, info, store, switch_config};

fn request(fields: &[(&str, &str)]) -> SwitchRequest {
    let fields = fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<Vec<_>>();
    SwitchRequest::from_form(&fields)
}

#[test]
fn test_request_parsing() {
    assert_eq!(
        request(&[("ajax", "ajax"), ("vids", "{}"), ("swdevice", "etherswitch1")]),
        SwitchRequest {
            device: Some("etherswitch1".to_owned()),
            vids: Some("{}".to_owned()),
        }
    );
    // PVIDs are ignored outside AJAX submissions.
    assert_eq!(request(&[("vids", "{}")]), SwitchRequest::default());
    assert_eq!(
        request(&[("ajax", "ajax"), ("vids", "")]),
        SwitchRequest::default()
    );
}

#[test]
fn test_list_ports() {
    let mut store = store(switch_config());

    let page = handle(&mut store, &driver(), SwitchRequest::default());

    assert!(page.errors.is_empty());
    assert!(!page.saved);
    assert!(page.devices.is_empty());
    assert_eq!(page.device.as_deref(), Some("etherswitch0"));
    let rows = page
        .ports
        .iter()
        .map(|row| (row.port.port, row.name.as_str(), row.pvid.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(rows, vec![(0, "cpu", "1"), (1, "lan1", "1"), (3, "3", "30")]);

    let html = render(&page, "token");
    assert!(html.contains("UFW Switch Ports"));
    assert!(html.contains("<th>Port VID</th>"));
    assert!(html.contains("id=\"vidform\""));
    assert!(html.contains("id=\"submit\""));
    assert!(html.contains("name=\"ajax\" value=\"ajax\""));
    assert!(html.contains("Click a Port VID to edit"));
    assert!(html.contains("<td class=\"text-success\">Active</td>"));
    assert!(html.contains("<td class=\"text-danger\">No Carrier</td>"));
    assert!(html.contains("<td>HOST,UP</td>"));
    assert!(html.contains(
        "<td>Ethernet autoselect (1000baseT &lt;full-duplex&gt;)</td>"
    ));
    assert!(html.contains("name=\"__csrf_magic\" value=\"token\""));
    assert!(!html.contains("name=\"swdevice\""));
}

#[test]
fn test_port_mode_hides_vids() {
    let mut store = store(switch_config());
    let mut driver = driver();
    driver.devices[0].1 = Some(info("ukswitch0", 5, VlanMode::Port));

    let page = handle(&mut store, &driver, SwitchRequest::default());
    let html = render(&page, "token");

    assert_eq!(page.ports.len(), 3);
    assert!(!html.contains("<th>Port VID</th>"));
    assert!(!html.contains("Click a Port VID to edit"));
    assert!(!html.contains("editable"));
    // No way to submit PVIDs either.
    assert!(!html.contains("id=\"vidform\""));
    assert!(!html.contains("id=\"submit\""));
    assert!(!html.contains("<script"));
    assert!(html.contains("802.1q VLAN mode"));
}

#[test]
fn test_save_vids() {
    let mut store = store(switch_config());

    let page = handle(
        &mut store,
        &driver(),
        request(&[
            ("ajax", "ajax"),
            ("vids", r#"{"vids":[{"port":"0","vid":"1"},{"port":"1","vid":"100"}]}"#),
        ]),
    );

    assert!(page.saved);
    assert!(page.errors.is_empty());
    assert_eq!(store.saves.len(), 1);
    let pvids = page
        .ports
        .iter()
        .map(|row| row.pvid.as_str())
        .collect::<Vec<_>>();
    assert_eq!(pvids, vec!["1", "100", "1"]);
    assert!(render(&page, "token").contains("Port VIDs updated."));
}

#[test]
fn test_rejected_vids_hide_ports() {
    let mut store = store(switch_config());
    let before = store.running().clone();

    let page = handle(
        &mut store,
        &driver(),
        request(&[
            ("ajax", "ajax"),
            ("vids", r#"{"vids":[{"port":"1","vid":"10"},{"port":"3","vid":"9999"}]}"#),
        ]),
    );

    assert!(!page.saved);
    assert_eq!(page.errors, vec!["9999 is not a valid VID for port 3"]);
    assert!(page.ports.is_empty());
    assert_eq!(store.running(), &before);

    // Saving again with no listed ports must not post an empty document.
    let html = render(&page, "token");
    assert!(html.contains("<tbody id=\"vlanporttablebody\">\n</tbody>"));
    assert!(html.contains("if (rows.length === 0) {\n\t\treturn;\n\t}"));
}

#[test]
fn test_device_selection() {
    let mut store = store(switch_config());
    let mut driver = driver();
    driver.devices.push(("etherswitch1".to_owned(), None));

    let page = handle(&mut store, &driver, SwitchRequest::default());
    assert_eq!(page.devices.len(), 1);
    assert!(page.errors.is_empty());
    assert!(render(&page, "token").contains("name=\"swdevice\""));

    let page = handle(
        &mut store,
        &driver,
        request(&[("swdevice", "etherswitch1")]),
    );
    assert_eq!(page.errors, vec![DEVICE_ERROR]);
    assert!(page.ports.is_empty());
}
