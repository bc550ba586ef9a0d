//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::debug::Debug;
use crate::error::{Error, Result};
use crate::path::{ConfigPath, PathSegment};

// Hierarchical configuration data.
//
// The root is always a map. Intermediate nodes are maps (addressed by key)
// or lists (addressed by index); leaves hold arbitrary JSON values.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(transparent)]
pub struct ConfigTree(Value);

// ===== impl ConfigTree =====

impl ConfigTree {
    pub fn new() -> ConfigTree {
        ConfigTree(Value::Object(Map::new()))
    }

    // Builds a tree from a JSON document. The document must be a map.
    pub fn from_value(value: Value) -> Option<ConfigTree> {
        value.is_object().then_some(ConfigTree(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_object().is_none_or(|map| map.is_empty())
    }

    // Returns the value stored at the given path, if any.
    pub fn get(&self, path: &ConfigPath) -> Option<&Value> {
        path.segments()
            .iter()
            .try_fold(&self.0, |node, segment| match (node, segment) {
                (Value::Object(map), PathSegment::Key(key)) => map.get(key),
                (Value::Array(list), PathSegment::Index(index)) => {
                    list.get(*index)
                }
                _ => None,
            })
    }

    // Returns true if a non-null value is stored at the given path.
    pub fn exists(&self, path: &ConfigPath) -> bool {
        self.get(path).is_some_and(|value| !value.is_null())
    }

    // Returns true if the given path holds an enabled flag.
    //
    // Flags are enabled by presence: any value other than `null` and `false`
    // counts as enabled.
    pub fn enabled(&self, path: &ConfigPath) -> bool {
        self.get(path).is_some_and(value_enabled)
    }

    // Stores a value at the given path, creating the intermediate nodes as
    // necessary.
    //
    // A list index equal to the list length appends a new element.
    pub fn set(&mut self, path: &ConfigPath, value: Value) -> Result<()> {
        Debug::ConfigSet(path).log();

        let mut node = &mut self.0;
        for segment in path.segments() {
            node = child_mut(node, segment, path)?;
        }
        *node = value;

        Ok(())
    }

    // Removes the value stored at the given path and returns it.
    pub fn delete(&mut self, path: &ConfigPath) -> Option<Value> {
        Debug::ConfigDelete(path).log();

        let (parent, last) = path.split_last()?;
        let mut node = &mut self.0;
        for segment in parent {
            node = match (node, segment) {
                (Value::Object(map), PathSegment::Key(key)) => {
                    map.get_mut(key)?
                }
                (Value::Array(list), PathSegment::Index(index)) => {
                    list.get_mut(*index)?
                }
                _ => return None,
            };
        }

        match (node, last) {
            (Value::Object(map), PathSegment::Key(key)) => map.remove(key),
            (Value::Array(list), PathSegment::Index(index))
                if *index < list.len() =>
            {
                Some(list.remove(*index))
            }
            _ => None,
        }
    }

    // Same as `set`, with the path given in its textual form.
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<()> {
        self.set(&path.parse()?, value)
    }

    // Same as `delete`, with the path given in its textual form.
    pub fn delete_path(&mut self, path: &str) -> Result<Option<Value>> {
        Ok(self.delete(&path.parse()?))
    }
}

impl Default for ConfigTree {
    fn default() -> ConfigTree {
        ConfigTree::new()
    }
}

// ===== global functions =====

// Returns true if the given value counts as an enabled flag.
pub fn value_enabled(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

// ===== helper functions =====

// Descends one level into the tree, turning null nodes into containers of
// the kind the path segment requires.
fn child_mut<'a>(
    node: &'a mut Value,
    segment: &PathSegment,
    path: &ConfigPath,
) -> Result<&'a mut Value> {
    match segment {
        PathSegment::Key(key) => {
            if node.is_null() {
                *node = Value::Object(Map::new());
            }
            match node {
                Value::Object(map) => {
                    Ok(map.entry(key.clone()).or_insert(Value::Null))
                }
                _ => Err(Error::NotAContainer(path.to_string())),
            }
        }
        PathSegment::Index(index) => {
            if node.is_null() {
                *node = Value::Array(vec![]);
            }
            match node {
                Value::Array(list) => {
                    if *index == list.len() {
                        list.push(Value::Null);
                    }
                    list.get_mut(*index).ok_or_else(|| {
                        Error::IndexOutOfRange(path.to_string(), *index)
                    })
                }
                _ => Err(Error::NotAContainer(path.to_string())),
            }
        }
    }
}
