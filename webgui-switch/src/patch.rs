//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use tracing::warn;
use webgui_northbound::ConfigRepository;
use webgui_utils::{html, vlan};

use crate::debug::Debug;

pub const SWITCH_PATH: &str = "switches/switch";
pub const SWPORTS_PATH: &str = "switches/switch[0]/swports";
pub const SAVE_COMMENT: &str = "Updating switch PVIDs";

// New port VLAN IDs, as posted by the ports table.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
pub struct VidPayload {
    pub vids: Vec<VidEntry>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize)]
pub struct VidEntry {
    #[serde(default, deserialize_with = "scalar_string")]
    pub port: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub vid: String,
}

// Entry rejected because of an invalid VLAN ID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemError {
    pub port: String,
    pub vid: String,
}

#[derive(Debug)]
pub enum PatchError {
    NoSwitchConfig,
    MalformedPayload(serde_json::Error),
    Items(Vec<ItemError>),
    Store(webgui_northbound::Error),
}

// Successful PVID update.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatchOutcome {
    // Identifier of the recorded configuration transaction.
    pub transaction: u32,
    // Stored (port, pvid) pairs, in submission order.
    pub entries: Vec<(String, String)>,
}

// ===== impl ItemError =====

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not a valid VID for port {}", self.vid, self.port)
    }
}

// ===== impl PatchError =====

impl PatchError {
    pub fn log(&self) {
        match self {
            PatchError::NoSwitchConfig => {
                warn!("{}", self);
            }
            PatchError::MalformedPayload(error) => {
                warn!(%error, "{}", self);
            }
            PatchError::Items(errors) => {
                warn!(count = %errors.len(), "{}", self);
            }
            PatchError::Store(error) => {
                warn!(%error, "{}", self);
            }
        }
    }

    // Messages shown to the user.
    pub fn messages(&self) -> Vec<String> {
        match self {
            PatchError::Items(errors) => {
                errors.iter().map(ToString::to_string).collect()
            }
            _ => vec![self.to_string()],
        }
    }
}

impl std::fmt::Display for PatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatchError::NoSwitchConfig => {
                write!(f, "There is no switch configuration to modify!")
            }
            PatchError::MalformedPayload(..) => {
                write!(f, "The submitted port VIDs could not be decoded.")
            }
            PatchError::Items(..) => {
                write!(f, "Invalid port VIDs were submitted.")
            }
            PatchError::Store(..) => {
                write!(f, "Unable to save the switch configuration.")
            }
        }
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatchError::MalformedPayload(error) => Some(error),
            PatchError::Store(error) => Some(error),
            _ => None,
        }
    }
}

impl From<webgui_northbound::Error> for PatchError {
    fn from(error: webgui_northbound::Error) -> PatchError {
        PatchError::Store(error)
    }
}

// ===== global functions =====

// Replaces the port VLAN IDs of the first switch.
//
// Every entry is checked. The stored port list is replaced only when all of
// them carry a valid VLAN ID; otherwise nothing is written and all rejected
// entries are reported.
pub fn handle_patch(
    store: &mut impl ConfigRepository,
    payload: &str,
) -> Result<PatchOutcome, PatchError> {
    let configured = matches!(
        store.get(SWITCH_PATH),
        Some(Value::Array(switches)) if !switches.is_empty()
    );
    if !configured {
        return Err(PatchError::NoSwitchConfig);
    }

    let payload = serde_json::from_str::<VidPayload>(payload)
        .map_err(PatchError::MalformedPayload)?;
    Debug::PatchReceived(payload.vids.len()).log();

    let mut entries = vec![];
    let mut errors = vec![];
    for entry in payload.vids {
        if vlan::vlan_valid_tag(&entry.vid) {
            entries.push((html::escape(&entry.port), html::escape(&entry.vid)));
        } else {
            let error = ItemError {
                port: entry.port,
                vid: entry.vid,
            };
            Debug::ItemRejected(&error).log();
            errors.push(error);
        }
    }
    if !errors.is_empty() {
        return Err(PatchError::Items(errors));
    }

    let transaction = store.commit(SAVE_COMMENT, |tree| {
        tree.delete_path(SWPORTS_PATH)?;
        if !entries.is_empty() {
            let swport = entries
                .iter()
                .map(|(port, pvid)| json!({ "port": port, "pvid": pvid }))
                .collect::<Vec<_>>();
            tree.set_path(SWPORTS_PATH, json!({ "swport": swport }))?;
        }
        Ok(())
    })?;
    Debug::PatchSaved(transaction, entries.len()).log();

    Ok(PatchOutcome {
        transaction,
        entries,
    })
}

// ===== helper functions =====

// Accepts both strings and numbers, as the table cells are posted as text
// but hand-written payloads tend to use numbers.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        String(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::String(value) => value.trim().to_owned(),
        Scalar::Number(value) => value.to_string(),
        Scalar::Null(()) => String::new(),
    })
}
