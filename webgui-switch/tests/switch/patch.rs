//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;
use webgui_northbound::ConfigRepository;
use webgui_switch::patch::{ItemError, SAVE_COMMENT};
use webgui_switch::{PatchError, handle_patch};

use super::{store, switch_config};

#[test]
fn test_invalid_vid_rejects_batch() {
    let mut store = store(switch_config());
    let before = store.running().clone();

    let error = handle_patch(
        &mut store,
        r#"{"vids":[{"port":"1","vid":"10"},{"port":"2","vid":"9999"}]}"#,
    )
    .unwrap_err();

    let PatchError::Items(errors) = &error else {
        panic!("unexpected error: {error}");
    };
    assert_eq!(
        errors,
        &vec![ItemError {
            port: "2".to_owned(),
            vid: "9999".to_owned(),
        }]
    );
    assert_eq!(
        error.messages(),
        vec!["9999 is not a valid VID for port 2".to_owned()]
    );
    assert_eq!(store.running(), &before);
    assert!(store.saves.is_empty());
}

#[test]
fn test_valid_vids_replace_list() {
    let mut store = store(switch_config());

    let outcome = handle_patch(
        &mut store,
        r#"{"vids":[{"port":"1","vid":"10"},{"port":"2","vid":"20"}]}"#,
    )
    .unwrap();

    assert_eq!(outcome.transaction, 1);
    assert_eq!(
        outcome.entries,
        vec![
            ("1".to_owned(), "10".to_owned()),
            ("2".to_owned(), "20".to_owned())
        ]
    );
    assert_eq!(
        store.get("switches/switch[0]/swports/swport"),
        Some(&json!([
            { "port": "1", "pvid": "10" },
            { "port": "2", "pvid": "20" }
        ]))
    );
    // Other switch settings are left alone.
    assert_eq!(
        store.get_str("switches/switch[0]/device"),
        Some("/dev/etherswitch0")
    );
    assert_eq!(store.saves, vec![SAVE_COMMENT]);
}

#[test]
fn test_every_invalid_entry_reported() {
    let mut store = store(switch_config());

    let error = handle_patch(
        &mut store,
        r#"{"vids":[{"port":"1","vid":"0"},{"port":"2","vid":"abc"},
            {"port":"3","vid":"4094"},{"port":"4","vid":"4095"},
            {"port":"5","vid":""}]}"#,
    )
    .unwrap_err();

    let ports = match error {
        PatchError::Items(errors) => {
            errors.into_iter().map(|error| error.port).collect::<Vec<_>>()
        }
        error => panic!("unexpected error: {error}"),
    };
    assert_eq!(ports, vec!["1", "2", "4", "5"]);
    assert!(store.saves.is_empty());
}

#[test]
fn test_markup_escaped() {
    let mut store = store(switch_config());

    handle_patch(&mut store, r#"{"vids":[{"port":"<b>1</b>","vid":"10"}]}"#)
        .unwrap();

    assert_eq!(
        store.get_str("switches/switch[0]/swports/swport[0]/port"),
        Some("&lt;b&gt;1&lt;/b&gt;")
    );
}

#[test]
fn test_empty_list_clears_ports() {
    let mut store = store(switch_config());

    let outcome = handle_patch(&mut store, r#"{"vids":[]}"#).unwrap();

    assert!(outcome.entries.is_empty());
    assert!(!store.exists("switches/switch[0]/swports"));
    assert_eq!(store.saves.len(), 1);
}

#[test]
fn test_no_switch_config() {
    for config in [json!({}), json!({ "switches": { "switch": [] } })] {
        let mut store = store(config);
        let before = store.running().clone();

        let error =
            handle_patch(&mut store, r#"{"vids":[{"port":"1","vid":"10"}]}"#)
                .unwrap_err();

        assert!(matches!(error, PatchError::NoSwitchConfig));
        assert_eq!(
            error.to_string(),
            "There is no switch configuration to modify!"
        );
        assert_eq!(store.running(), &before);
    }
}

#[test]
fn test_malformed_payload() {
    let mut store = store(switch_config());
    let before = store.running().clone();

    for payload in ["{", r#"{"ports":[]}"#, r#"{"vids":{"port":"1"}}"#] {
        let error = handle_patch(&mut store, payload).unwrap_err();
        assert!(matches!(error, PatchError::MalformedPayload(..)));
    }
    assert_eq!(store.running(), &before);
    assert!(store.saves.is_empty());
}

#[test]
fn test_save_failure() {
    let mut store = store(switch_config());
    store.fail_saves = true;
    let before = store.running().clone();

    let error =
        handle_patch(&mut store, r#"{"vids":[{"port":"1","vid":"10"}]}"#)
            .unwrap_err();

    assert!(matches!(error, PatchError::Store(..)));
    assert_eq!(store.running(), &before);
}
