use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a contact.
///
/// Serialized as a bare JSON number. The in-memory store draws it at random,
/// the sled store takes it from the database's monotonic id generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl ContactId {
    pub fn to_be_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a path segment is not a valid contact id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformatted id: {0}")]
pub struct MalformedId(pub String);

impl FromStr for ContactId {
    type Err = MalformedId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(ContactId)
            .map_err(|_| MalformedId(s.to_string()))
    }
}

/// A stored phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone_number: String,
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Attaches an id to a validated draft.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone_number: draft.phone_number,
        }
    }
}

/// Body of a create request.
///
/// Only `name` and `phoneNumber` are read; any other field in the JSON body
/// is dropped by the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// A create request that passed the required-field check but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone_number: String,
}
