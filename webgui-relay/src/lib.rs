//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Services: DHCPv6 Relay.
//!
//! The page loads the relay settings from the configuration store, refuses
//! to operate while a DHCPv6 server is enabled on any interface, validates
//! submitted settings, and on success saves them and asks the relay service
//! to reconfigure itself.

mod debug;

pub mod controller;
pub mod interfaces;
pub mod model;
pub mod render;
pub mod service;
#[cfg(feature = "testing")]
pub mod testing;

pub use crate::controller::{RelayForm, RelayRequest, RelayView, handle_request};
pub use crate::interfaces::InterfaceInventory;
pub use crate::model::{ApplyOutcome, FieldError, RelayCfg, RelaySubmission};
pub use crate::service::RelayService;
