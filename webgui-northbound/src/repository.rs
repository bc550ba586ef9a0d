//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::Value;

use crate::debug::Debug;
use crate::error::{Error, Result};
use crate::path::ConfigPath;
use crate::tree::ConfigTree;

/// Access to the running configuration.
///
/// Handlers receive an implementation of this trait instead of reaching out
/// to global state. Reads are infallible: a malformed path reads as absent.
/// Writes only touch the in-memory running configuration until [`save`] is
/// called.
///
/// [`save`]: ConfigRepository::save
pub trait ConfigRepository {
    fn running(&self) -> &ConfigTree;

    fn running_mut(&mut self) -> &mut ConfigTree;

    /// Makes the running configuration durable, recording the given comment.
    /// Returns the identifier of the recorded transaction.
    fn save(&mut self, comment: &str) -> Result<u32>;

    fn get(&self, path: &str) -> Option<&Value> {
        let path = parse_path(path)?;
        self.running().get(&path)
    }

    fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    fn exists(&self, path: &str) -> bool {
        parse_path(path).is_some_and(|path| self.running().exists(&path))
    }

    fn enabled(&self, path: &str) -> bool {
        parse_path(path).is_some_and(|path| self.running().enabled(&path))
    }

    fn set(&mut self, path: &str, value: Value) -> Result<()> {
        let path = path.parse::<ConfigPath>()?;
        self.running_mut().set(&path, value)
    }

    fn delete(&mut self, path: &str) -> Result<Option<Value>> {
        let path = path.parse::<ConfigPath>()?;
        Ok(self.running_mut().delete(&path))
    }

    /// Applies a set of changes as one unit.
    ///
    /// The changes are made on a copy of the running configuration. The copy
    /// replaces the running configuration and is saved only if every change
    /// succeeds; if saving fails the previous configuration is restored.
    fn commit<F>(&mut self, comment: &str, edit: F) -> Result<u32>
    where
        Self: Sized,
        F: FnOnce(&mut ConfigTree) -> Result<()>,
    {
        let mut candidate = self.running().clone();
        edit(&mut candidate)?;

        let previous = std::mem::replace(self.running_mut(), candidate);
        match self.save(comment) {
            Ok(id) => Ok(id),
            Err(error) => {
                Debug::ConfigRestored(comment).log();
                *self.running_mut() = previous;
                Err(error)
            }
        }
    }
}

// ===== helper functions =====

fn parse_path(path: &str) -> Option<ConfigPath> {
    match path.parse() {
        Ok(path) => Some(path),
        Err(error @ Error::InvalidPath(..)) => {
            error.log();
            None
        }
        Err(_) => None,
    }
}
