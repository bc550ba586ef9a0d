//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::warn;

//
// Type aliases.
//
pub type Result<T> = std::result::Result<T, Error>;

// Configuration store errors.
#[derive(Debug)]
pub enum Error {
    InvalidPath(String),
    NotAContainer(String),
    IndexOutOfRange(String, usize),
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::InvalidPath(path) | Error::NotAContainer(path) => {
                warn!(%path, "{}", self);
            }
            Error::IndexOutOfRange(path, index) => {
                warn!(%path, %index, "{}", self);
            }
            Error::Storage(error) => {
                warn!(%error, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPath(..) => {
                write!(f, "invalid configuration path")
            }
            Error::NotAContainer(..) => {
                write!(f, "configuration node can't hold children")
            }
            Error::IndexOutOfRange(..) => {
                write!(f, "list index out of range")
            }
            Error::Storage(..) => {
                write!(f, "failed to access non-volatile storage")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Storage(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl From<pickledb::error::Error> for Error {
    fn from(error: pickledb::error::Error) -> Error {
        Error::Storage(Box::new(error))
    }
}
