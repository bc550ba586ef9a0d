//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::str::FromStr;

use crate::error::{Error, Result};

// Slash-delimited path into the configuration tree.
//
// Each segment is either a map key or a list index. List indices can be
// written as a separate numeric segment ("switches/switch/0/swports") or
// attached to a key ("switches/switch[0]/swports").
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConfigPath(Vec<PathSegment>);

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

// ===== impl ConfigPath =====

impl ConfigPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    // Splits the path into its parent path and last segment.
    pub fn split_last(&self) -> Option<(&[PathSegment], &PathSegment)> {
        self.0.split_last().map(|(last, parent)| (parent, last))
    }
}

impl FromStr for ConfigPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<ConfigPath> {
        let invalid = || Error::InvalidPath(path.to_owned());
        let mut segments = vec![];

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            // Key with attached list indices, e.g. "switch[0]".
            let (key, mut rest) = match segment.find('[') {
                Some(pos) => segment.split_at(pos),
                None => (segment, ""),
            };
            if key.contains(']') {
                return Err(invalid());
            }
            if key.bytes().all(|b| b.is_ascii_digit()) && !key.is_empty() {
                let index = key.parse().map_err(|_| invalid())?;
                segments.push(PathSegment::Index(index));
            } else if !key.is_empty() {
                segments.push(PathSegment::Key(key.to_owned()));
            } else if segments.is_empty() {
                // A leading index has nothing to index into.
                return Err(invalid());
            }

            while !rest.is_empty() {
                let close = rest.find(']').ok_or_else(invalid)?;
                let index = rest[1..close].parse().map_err(|_| invalid())?;
                segments.push(PathSegment::Index(index));
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(invalid());
                }
            }
        }

        if segments.is_empty() {
            return Err(invalid());
        }

        Ok(ConfigPath(segments))
    }
}

impl std::fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        write!(f, "/")?;
                    }
                    write!(f, "{key}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}
