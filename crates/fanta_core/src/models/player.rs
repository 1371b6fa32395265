use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Role;

/// Opaque player identifier.
///
/// New ids are `player_<uuid>`; any string is accepted when restoring a record
/// so that ids written by older clients survive a round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> Self {
        Self(format!("player_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A drafted athlete.
///
/// The struct is its own persistence record: serde produces
/// `{id, name, cost, role, createdAt}`. No validation happens here, callers
/// check name and cost before constructing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub cost: u32,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(name: impl Into<String>, cost: u32, role: Role) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            cost,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn to_record(&self) -> serde_json::Value {
        // Plain struct of strings and integers; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn from_record(record: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(record)
    }

    /// "Credito" for a single credit, "Crediti" otherwise.
    pub fn cost_unit(&self) -> &'static str {
        if self.cost == 1 {
            "Credito"
        } else {
            "Crediti"
        }
    }
}
