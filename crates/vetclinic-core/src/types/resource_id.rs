//! Record identifier type.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A server-assigned record identifier.
///
/// Identifiers are opaque: they are never parsed, only compared and echoed
/// back in URLs. The backend emits UUID strings, but some endpoints answer
/// with integer ids, so both deserialize into the same type.
///
/// # Example
///
/// ```
/// use vetclinic_core::ResourceId;
///
/// let id = ResourceId::new("5f0c2b1e-7d1a-4c55-9a51-2b8c0a4e3f10").unwrap();
/// assert_eq!(id.as_str(), "5f0c2b1e-7d1a-4c55-9a51-2b8c0a4e3f10");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a new id, rejecting blank strings.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(InvalidInputError::ResourceId {
                value: s,
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        let raw = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Int(n) => n.to_string(),
        };
        ResourceId::new(raw).map_err(serde::de::Error::custom)
    }
}
