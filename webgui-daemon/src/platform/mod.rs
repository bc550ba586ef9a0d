//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod interfaces;
pub mod service;
pub mod switch;

pub use interfaces::ConfigInterfaces;
pub use service::CommandServiceControl;
pub use switch::SnapshotSwitchDriver;
