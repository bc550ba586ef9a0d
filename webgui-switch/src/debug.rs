//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{debug, debug_span};

use crate::patch::ItemError;

// Switch page debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    DeviceSelected(&'a str),
    DeviceUnavailable(&'a str),
    PatchReceived(usize),
    ItemRejected(&'a ItemError),
    PatchSaved(u32, usize),
}

// ===== impl Debug =====

impl Debug<'_> {
    pub fn log(&self) {
        match self {
            Debug::DeviceSelected(device) | Debug::DeviceUnavailable(device) => {
                debug_span!("switch").in_scope(|| {
                    debug!(%device, "{}", self);
                });
            }
            Debug::PatchReceived(entries) => {
                debug_span!("switch").in_scope(|| {
                    debug!(%entries, "{}", self);
                });
            }
            Debug::ItemRejected(error) => {
                debug_span!("switch").in_scope(|| {
                    debug!(port = %error.port, vid = %error.vid, "{}", self);
                });
            }
            Debug::PatchSaved(transaction, entries) => {
                debug_span!("switch").in_scope(|| {
                    debug!(%transaction, %entries, "{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::DeviceSelected(..) => {
                write!(f, "switch device selected")
            }
            Debug::DeviceUnavailable(..) => {
                write!(f, "switch device information unavailable")
            }
            Debug::PatchReceived(..) => {
                write!(f, "port VIDs submitted")
            }
            Debug::ItemRejected(..) => {
                write!(f, "invalid port VID")
            }
            Debug::PatchSaved(..) => {
                write!(f, "port VIDs saved")
            }
        }
    }
}
