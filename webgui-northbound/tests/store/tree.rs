//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;
use webgui_northbound::memory::MemoryStore;
use webgui_northbound::{ConfigRepository, ConfigTree, Error};

#[test]
fn test_get_with_defaults() {
    let store = MemoryStore::from_json(json!({
        "dhcrelay6": { "interface": "lan,opt1" }
    }));

    assert_eq!(store.get_str("dhcrelay6/interface"), Some("lan,opt1"));
    assert_eq!(store.get("dhcrelay6/server"), None);
    assert_eq!(
        store.get_or("dhcrelay6/carpstatusvip", json!("none")),
        json!("none")
    );
    // Malformed paths read as absent.
    assert_eq!(store.get("dhcrelay6[x]"), None);
}

#[test]
fn test_enabled_flags() {
    let store = MemoryStore::from_json(json!({
        "interfaces": {
            "lan": { "enable": "" },
            "wan": { "enable": true },
            "opt1": { "enable": false },
            "opt2": { "enable": null },
            "opt3": {}
        }
    }));

    assert!(store.enabled("interfaces/lan/enable"));
    assert!(store.enabled("interfaces/wan/enable"));
    assert!(!store.enabled("interfaces/opt1/enable"));
    assert!(!store.enabled("interfaces/opt2/enable"));
    assert!(!store.enabled("interfaces/opt3/enable"));
    assert!(store.exists("interfaces/opt1/enable"));
    assert!(!store.exists("interfaces/opt2/enable"));
}

#[test]
fn test_set_creates_intermediate_nodes() {
    let mut store = MemoryStore::default();
    store
        .set("switches/switch[0]/swports/swport[0]/port", json!("1"))
        .unwrap();
    store
        .set("switches/switch[0]/swports/swport[1]/port", json!("2"))
        .unwrap();

    assert_eq!(
        store.running().as_value(),
        &json!({
            "switches": { "switch": [
                { "swports": { "swport": [ { "port": "1" }, { "port": "2" } ] } }
            ]}
        })
    );
}

#[test]
fn test_set_errors() {
    let mut store = MemoryStore::from_json(json!({
        "system": { "hostname": "fw" },
        "list": [1]
    }));

    assert!(matches!(
        store.set("system/hostname/extra", json!(1)),
        Err(Error::NotAContainer(..))
    ));
    assert!(matches!(
        store.set("list[5]", json!(1)),
        Err(Error::IndexOutOfRange(_, 5))
    ));
    assert!(matches!(
        store.set("bad[", json!(1)),
        Err(Error::InvalidPath(..))
    ));
}

#[test]
fn test_delete() {
    let mut store = MemoryStore::from_json(json!({
        "dhcrelay6": { "interface": "lan", "server": "2001:db8::1" },
        "list": ["a", "b", "c"]
    }));

    assert_eq!(
        store.delete("dhcrelay6/interface").unwrap(),
        Some(json!("lan"))
    );
    assert_eq!(store.delete("dhcrelay6/interface").unwrap(), None);
    assert_eq!(store.delete("list/1").unwrap(), Some(json!("b")));
    assert_eq!(store.delete("list[7]").unwrap(), None);
    assert_eq!(store.delete("missing/path").unwrap(), None);
    assert_eq!(
        store.running().as_value(),
        &json!({
            "dhcrelay6": { "server": "2001:db8::1" },
            "list": ["a", "c"]
        })
    );
}

#[test]
fn test_commit_is_all_or_nothing() {
    let mut store = MemoryStore::from_json(json!({ "a": { "b": 1 } }));
    let before = store.running().clone();

    // A failing edit leaves the running configuration untouched.
    let result = store.commit("edit", |tree| {
        tree.set_path("a/b", json!(2))?;
        tree.set_path("a/b/c", json!(3))
    });
    assert!(matches!(result, Err(Error::NotAContainer(..))));
    assert_eq!(store.running(), &before);
    assert!(store.saves.is_empty());

    // So does a failing save.
    store.fail_saves = true;
    let result = store.commit("edit", |tree| tree.set_path("a/b", json!(2)));
    assert!(matches!(result, Err(Error::Storage(..))));
    assert_eq!(store.running(), &before);

    store.fail_saves = false;
    let id = store
        .commit("edit", |tree| tree.set_path("a/b", json!(2)))
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(store.get("a/b"), Some(&json!(2)));
    assert_eq!(store.saves, vec!["edit".to_owned()]);
}

#[test]
fn test_tree_from_value_requires_map() {
    assert!(ConfigTree::from_value(json!([1, 2])).is_none());
    assert!(ConfigTree::from_value(json!({})).unwrap().is_empty());
}
