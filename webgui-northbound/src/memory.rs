//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::Value;

use crate::error::{Error, Result};
use crate::repository::ConfigRepository;
use crate::tree::ConfigTree;

// In-memory configuration store used by tests.
//
// Saves are recorded instead of written to disk, and can be made to fail to
// exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    running: ConfigTree,
    // Comments of all successful saves, oldest first.
    pub saves: Vec<String>,
    // When set, every save fails.
    pub fail_saves: bool,
}

// ===== impl MemoryStore =====

impl MemoryStore {
    // Creates a store from a JSON document.
    //
    // Panics if the document isn't a map.
    pub fn from_json(value: Value) -> MemoryStore {
        let running = ConfigTree::from_value(value)
            .expect("configuration root must be a map");
        MemoryStore {
            running,
            ..Default::default()
        }
    }
}

impl ConfigRepository for MemoryStore {
    fn running(&self) -> &ConfigTree {
        &self.running
    }

    fn running_mut(&mut self) -> &mut ConfigTree {
        &mut self.running
    }

    fn save(&mut self, comment: &str) -> Result<u32> {
        if self.fail_saves {
            let error = std::io::Error::other("simulated failure");
            return Err(Error::Storage(error.into()));
        }
        self.saves.push(comment.to_owned());
        Ok(self.saves.len() as u32)
    }
}
