//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::{debug, debug_span};

use crate::model::FieldError;

// Relay page debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    Blocked,
    SubmissionReceived(bool),
    ValidationFailed(&'a [FieldError]),
    ConfigPersisted(u32),
    Reconfigured(i32),
}

// ===== impl Debug =====

impl Debug<'_> {
    pub fn log(&self) {
        match self {
            Debug::Blocked => {
                debug_span!("relay").in_scope(|| {
                    debug!("{}", self);
                });
            }
            Debug::SubmissionReceived(enable) => {
                debug_span!("relay").in_scope(|| {
                    debug!(%enable, "{}", self);
                });
            }
            Debug::ValidationFailed(errors) => {
                debug_span!("relay").in_scope(|| {
                    for error in errors.iter() {
                        debug!(field = %error.field(), %error, "{}", self);
                    }
                });
            }
            Debug::ConfigPersisted(transaction) => {
                debug_span!("relay").in_scope(|| {
                    debug!(%transaction, "{}", self);
                });
            }
            Debug::Reconfigured(status) => {
                debug_span!("relay").in_scope(|| {
                    debug!(%status, "{}", self);
                });
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::Blocked => {
                write!(f, "DHCPv6 server enabled, relay settings locked")
            }
            Debug::SubmissionReceived(..) => {
                write!(f, "relay settings submitted")
            }
            Debug::ValidationFailed(..) => {
                write!(f, "relay settings rejected")
            }
            Debug::ConfigPersisted(..) => {
                write!(f, "relay settings saved")
            }
            Debug::Reconfigured(..) => {
                write!(f, "relay service reconfigured")
            }
        }
    }
}
