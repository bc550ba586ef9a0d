//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{debug, debug_span, trace, trace_span};

use crate::path::ConfigPath;

#[derive(Debug)]
pub enum Debug<'a> {
    StoreLoaded(&'a str, usize),
    StoreSeeded(&'a str),
    ConfigSet(&'a ConfigPath),
    ConfigDelete(&'a ConfigPath),
    ConfigSaved(u32, &'a str),
    ConfigRestored(&'a str),
}

// ===== impl Debug =====

impl Debug<'_> {
    pub fn log(&self) {
        match self {
            Debug::StoreLoaded(path, transactions) => {
                debug_span!("northbound").in_scope(|| {
                    debug!(%path, %transactions, "{}", self);
                });
            }
            Debug::StoreSeeded(path) => {
                debug_span!("northbound").in_scope(|| {
                    debug!(%path, "{}", self);
                });
            }
            Debug::ConfigSet(path) | Debug::ConfigDelete(path) => {
                trace_span!("northbound").in_scope(|| {
                    trace!(%path, "{}", self);
                });
            }
            Debug::ConfigSaved(id, comment) => {
                debug_span!("northbound").in_scope(|| {
                    debug!(transaction = %id, %comment, "{}", self);
                });
            }
            Debug::ConfigRestored(comment) => {
                debug_span!("northbound").in_scope(|| {
                    debug!(%comment, "{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::StoreLoaded(..) => {
                write!(f, "configuration store loaded")
            }
            Debug::StoreSeeded(..) => {
                write!(f, "configuration store seeded")
            }
            Debug::ConfigSet(..) => {
                write!(f, "configuration value set")
            }
            Debug::ConfigDelete(..) => {
                write!(f, "configuration path deleted")
            }
            Debug::ConfigSaved(..) => {
                write!(f, "configuration saved")
            }
            Debug::ConfigRestored(..) => {
                write!(f, "candidate configuration discarded")
            }
        }
    }
}
