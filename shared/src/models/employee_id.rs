//! Employee identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a store-assigned record key
pub const EMPLOYEE_ID_LEN: usize = 20;

/// Store-assigned employee identifier
///
/// SurrealDB generates random record keys of 20 characters drawn from
/// `[0-9a-z]`. Parsing only checks that syntax; it says nothing about
/// whether a record with this key exists.
///
/// ```
/// use shared::EmployeeId;
///
/// assert!(EmployeeId::is_valid("0a1b2c3d4e5f6g7h8i9j"));
/// assert!(!EmployeeId::is_valid("not-an-id"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

/// Identifier did not match the store's key syntax
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid employee id: {0}")]
pub struct InvalidEmployeeId(pub String);

impl EmployeeId {
    /// Validate `raw` and wrap it
    pub fn parse(raw: &str) -> Result<Self, InvalidEmployeeId> {
        if Self::is_valid(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidEmployeeId(raw.to_string()))
        }
    }

    /// Check the identifier syntax without allocating
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == EMPLOYEE_ID_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = InvalidEmployeeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = InvalidEmployeeId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidEmployeeId(value))
        }
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
