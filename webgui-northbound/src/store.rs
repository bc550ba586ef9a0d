//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::path::Path;

use chrono::{DateTime, Utc};
use derive_new::new;
use pickledb::{PickleDb, PickleDbDumpPolicy, SerializationMethod};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::debug::Debug;
use crate::error::Result;
use crate::repository::ConfigRepository;
use crate::tree::ConfigTree;

const CONFIG_KEY: &str = "config";
const NEXT_ID_KEY: &str = "next_id";
const TRANSACTION_PREFIX: &str = "transaction";

// Configuration store backed by non-volatile storage.
//
// The running configuration lives in memory. Every save writes it back to
// the database together with a transaction record, and the database file is
// rewritten once per save.
pub struct Store {
    // Running configuration.
    running: ConfigTree,
    // Non-volatile storage.
    db: PickleDb,
}

#[derive(Clone, Debug, new)]
#[derive(Deserialize, Serialize)]
pub struct Transaction {
    // Unique identifier for the transaction.
    #[new(default)]
    pub id: u32,

    // Date and time for when the transaction occurred.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    // Description of the change.
    pub comment: String,

    // Configuration that was saved.
    pub configuration: ConfigTree,
}

// ===== impl Store =====

impl Store {
    // Loads the configuration store from a file, or initializes an empty one
    // if the file doesn't exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Store> {
        let dump_policy = PickleDbDumpPolicy::DumpUponRequest;
        let serialization_method = SerializationMethod::Json;
        let db = match path.as_ref().exists() {
            true => PickleDb::load(&path, dump_policy, serialization_method)?,
            false => PickleDb::new(&path, dump_policy, serialization_method),
        };
        let running = db.get::<ConfigTree>(CONFIG_KEY).unwrap_or_default();

        let store = Store { running, db };
        Debug::StoreLoaded(
            &path.as_ref().display().to_string(),
            store.transaction_count(),
        )
        .log();

        Ok(store)
    }

    // Installs an initial configuration if the store holds none.
    //
    // Returns true if the seed was installed.
    pub fn seed(&mut self, config: ConfigTree, origin: &str) -> Result<bool> {
        if !self.running.is_empty() || config.is_empty() {
            return Ok(false);
        }

        self.running = config;
        self.save(&format!("Initial configuration from {origin}"))?;
        Debug::StoreSeeded(origin).log();

        Ok(true)
    }

    // Retrieves a transaction, identified by its ID.
    pub fn transaction(&self, transaction_id: u32) -> Option<Transaction> {
        let key = format!("{TRANSACTION_PREFIX}{transaction_id}");
        self.db.get(&key)
    }

    // Retrieves all recorded transactions, newest first.
    pub fn transactions(&self) -> Vec<Transaction> {
        let mut transactions = self
            .db
            .iter()
            .filter(|entry| entry.get_key().starts_with(TRANSACTION_PREFIX))
            .filter_map(|entry| entry.get_value::<Transaction>())
            .collect::<Vec<_>>();
        transactions.sort_by(|a, b| b.id.cmp(&a.id));
        transactions
    }

    fn transaction_count(&self) -> usize {
        self.db
            .get_all()
            .iter()
            .filter(|key| key.starts_with(TRANSACTION_PREFIX))
            .count()
    }

    // Retrieves the next available transaction ID and updates it.
    fn transaction_next_key(&mut self) -> Result<u32> {
        let next_id = self.db.get::<u32>(NEXT_ID_KEY).unwrap_or(0) + 1;
        self.db.set(NEXT_ID_KEY, &next_id)?;
        Ok(next_id)
    }

    // Records the running configuration as a new transaction and writes the
    // database to disk.
    fn record(&mut self, comment: &str) -> Result<u32> {
        let mut transaction =
            Transaction::new(Utc::now(), comment.to_owned(), self.running.clone());
        transaction.id = self.transaction_next_key()?;

        let key = format!("{TRANSACTION_PREFIX}{}", transaction.id);
        self.db.set(CONFIG_KEY, &self.running)?;
        self.db.set(&key, &transaction)?;
        self.db.dump()?;

        Ok(transaction.id)
    }

    // Drops the records of a save that didn't reach the disk, restoring the
    // previous ID counter and configuration.
    fn discard(&mut self, next_id: Option<u32>, config: Option<ConfigTree>) {
        let failed_id = next_id.unwrap_or(0) + 1;
        let _ = self.db.rem(&format!("{TRANSACTION_PREFIX}{failed_id}"));

        if let Some(next_id) = next_id {
            let _ = self.db.set(NEXT_ID_KEY, &next_id);
        } else {
            let _ = self.db.rem(NEXT_ID_KEY);
        }
        if let Some(config) = config {
            let _ = self.db.set(CONFIG_KEY, &config);
        } else {
            let _ = self.db.rem(CONFIG_KEY);
        }
    }
}

impl ConfigRepository for Store {
    fn running(&self) -> &ConfigTree {
        &self.running
    }

    fn running_mut(&mut self) -> &mut ConfigTree {
        &mut self.running
    }

    fn save(&mut self, comment: &str) -> Result<u32> {
        let next_id = self.db.get::<u32>(NEXT_ID_KEY);
        let config = self.db.get::<ConfigTree>(CONFIG_KEY);

        match self.record(comment) {
            Ok(id) => {
                Debug::ConfigSaved(id, comment).log();
                Ok(id)
            }
            Err(error) => {
                error!(%error, "failed to write configuration to disk");
                self.discard(next_id, config);
                Err(error)
            }
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
