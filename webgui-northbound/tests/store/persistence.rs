//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::json;
use webgui_northbound::{ConfigRepository, ConfigTree, Store};

#[test]
fn test_save_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.db");

    let mut store = Store::load(&path).unwrap();
    assert!(store.running().is_empty());
    store.set("dhcrelay6/enable", json!(true)).unwrap();
    store.set("dhcrelay6/server", json!("2001:db8::1")).unwrap();
    let id = store.save("DHCPv6 Relay settings saved").unwrap();
    assert_eq!(id, 1);

    // Unsaved changes are not persisted.
    store.set("dhcrelay6/agentoption", json!(true)).unwrap();
    drop(store);

    let store = Store::load(&path).unwrap();
    assert_eq!(
        store.running().as_value(),
        &json!({
            "dhcrelay6": { "enable": true, "server": "2001:db8::1" }
        })
    );
}

#[test]
fn test_transaction_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.db");

    let mut store = Store::load(&path).unwrap();
    store
        .commit("first", |tree| tree.set_path("a", json!(1)))
        .unwrap();
    store
        .commit("second", |tree| tree.set_path("a", json!(2)))
        .unwrap();
    drop(store);

    let mut store = Store::load(&path).unwrap();
    let transactions = store.transactions();
    let summary = transactions
        .iter()
        .map(|t| (t.id, t.comment.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(summary, vec![(2, "second"), (1, "first")]);

    let first = store.transaction(1).unwrap();
    assert_eq!(first.configuration.as_value(), &json!({ "a": 1 }));
    assert!(store.transaction(3).is_none());

    // Identifiers keep increasing across reloads.
    let id = store.save("third").unwrap();
    assert_eq!(id, 3);
}

#[test]
fn test_seed_only_applies_to_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.db");
    let seed = ConfigTree::from_value(json!({
        "interfaces": { "lan": { "enable": true } }
    }))
    .unwrap();

    let mut store = Store::load(&path).unwrap();
    assert!(store.seed(seed.clone(), "seed.json").unwrap());
    assert!(store.enabled("interfaces/lan/enable"));
    assert_eq!(store.transactions().len(), 1);

    store.set("interfaces/lan/enable", json!(false)).unwrap();
    assert!(!store.seed(seed, "seed.json").unwrap());
    assert!(!store.enabled("interfaces/lan/enable"));
}

#[test]
fn test_failed_save_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("storage");
    std::fs::create_dir(&storage).unwrap();
    let path = storage.join("config.db");

    let mut store = Store::load(&path).unwrap();
    store
        .commit("first", |tree| tree.set_path("a", json!(1)))
        .unwrap();

    // Writing fails while the storage directory is gone.
    std::fs::remove_dir_all(&storage).unwrap();
    assert!(
        store
            .commit("failed", |tree| tree.set_path("a", json!(2)))
            .is_err()
    );
    assert_eq!(store.running().as_value(), &json!({ "a": 1 }));
    assert_eq!(store.transactions().len(), 1);

    std::fs::create_dir(&storage).unwrap();
    let id = store
        .commit("third", |tree| tree.set_path("b", json!(3)))
        .unwrap();
    assert_eq!(id, 2);
    drop(store);

    let store = Store::load(&path).unwrap();
    let summary = store
        .transactions()
        .iter()
        .map(|t| (t.id, t.comment.clone()))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![(2, "third".to_owned()), (1, "first".to_owned())]
    );
    assert_eq!(store.running().as_value(), &json!({ "a": 1, "b": 3 }));
}
