//! Extension identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identity of one module extension.
///
/// An extension is addressed by the module file that defines it and the
/// name it is exported under within that file. The type is opaque to the
/// rest of the workspace: everything downstream uses it only as map-key
/// material (equality, ordering, hashing).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExtensionId {
    /// Label of the module file defining the extension (e.g. `//tools:deps.mod`).
    pub module_file: String,
    /// Name the extension is exported under within that file.
    pub name: String,
}

impl ExtensionId {
    /// Create an identity from its two components.
    pub fn new(module_file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module_file: module_file.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%{}", self.module_file, self.name)
    }
}

impl FromStr for ExtensionId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('%') {
            Some((file, name)) if !file.is_empty() && !name.is_empty() => {
                Ok(Self::new(file, name))
            }
            _ => Err(Error::InvalidExtensionId {
                value: s.to_string(),
            }),
        }
    }
}
