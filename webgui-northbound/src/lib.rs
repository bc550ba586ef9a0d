//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod debug;

pub mod error;
#[cfg(feature = "testing")]
pub mod memory;
pub mod path;
pub mod repository;
pub mod store;
pub mod tree;

use std::sync::{Arc, Mutex};

pub use crate::error::{Error, Result};
pub use crate::path::ConfigPath;
pub use crate::repository::ConfigRepository;
pub use crate::store::{Store, Transaction};
pub use crate::tree::ConfigTree;

// Process-wide configuration store shared among request handlers.
pub type Database = Arc<Mutex<Store>>;
