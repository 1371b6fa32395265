use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Player role in a fantacalcio squad.
///
/// Serialized with the plural list key used by the stored roster record
/// (`"goalkeepers"`, `"defenders"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    #[serde(rename = "goalkeepers")]
    Goalkeeper,
    #[serde(rename = "defenders")]
    Defender,
    #[serde(rename = "midfielders")]
    Midfielder,
    #[serde(rename = "strikers")]
    Striker,
}

impl Role {
    /// Enumeration order. Removal scans and record layout both follow it.
    pub const ALL: [Role; 4] = [Role::Goalkeeper, Role::Defender, Role::Midfielder, Role::Striker];

    pub fn index(self) -> usize {
        match self {
            Role::Goalkeeper => 0,
            Role::Defender => 1,
            Role::Midfielder => 2,
            Role::Striker => 3,
        }
    }

    /// Plural storage key (matches the serde name).
    pub fn key(self) -> &'static str {
        match self {
            Role::Goalkeeper => "goalkeepers",
            Role::Defender => "defenders",
            Role::Midfielder => "midfielders",
            Role::Striker => "strikers",
        }
    }

    /// Singular display name, used when prompting for a new player.
    pub fn singular_label(self) -> &'static str {
        match self {
            Role::Goalkeeper => "Portiere",
            Role::Defender => "Difensore",
            Role::Midfielder => "Centrocampista",
            Role::Striker => "Attaccante",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Accepts the storage key, English or Italian names, and the usual short codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goalkeepers" | "goalkeeper" | "portieri" | "portiere" | "gk" | "p" => Ok(Role::Goalkeeper),
            "defenders" | "defender" | "difensori" | "difensore" | "df" | "d" => Ok(Role::Defender),
            "midfielders" | "midfielder" | "centrocampisti" | "centrocampista" | "cc" | "mf" | "c" => {
                Ok(Role::Midfielder)
            }
            "strikers" | "striker" | "attaccanti" | "attaccante" | "at" | "st" | "a" => Ok(Role::Striker),
            other => Err(format!("Ruolo non valido: {}", other)),
        }
    }
}

/// Per-role squad limits and display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQuota {
    pub min: usize,
    pub max: usize,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Quota for every role, indexed by [`Role::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaTable {
    entries: [RoleQuota; 4],
}

impl Default for QuotaTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuotaTable {
    /// Standard fantacalcio squad: 3 + 8 + 8 + 6 = 25 players.
    pub fn standard() -> Self {
        Self {
            entries: [
                RoleQuota { min: 3, max: 3, label: "Portieri", icon: "GK" },
                RoleQuota { min: 8, max: 8, label: "Difensori", icon: "DF" },
                RoleQuota { min: 8, max: 8, label: "Centrocampisti", icon: "CC" },
                RoleQuota { min: 6, max: 6, label: "Attaccanti", icon: "AT" },
            ],
        }
    }

    /// Build a table from explicit `(role, quota)` pairs.
    ///
    /// Every role must appear exactly once and each quota needs `min <= max`.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Role, RoleQuota)>,
    ) -> Result<Self, RosterError> {
        let mut slots: [Option<RoleQuota>; 4] = [None, None, None, None];

        for (role, quota) in entries {
            if quota.min > quota.max {
                return Err(RosterError::InvalidQuota(format!(
                    "{}: min {} exceeds max {}",
                    role, quota.min, quota.max
                )));
            }
            let slot = &mut slots[role.index()];
            if slot.is_some() {
                return Err(RosterError::InvalidQuota(format!("{} configured twice", role)));
            }
            *slot = Some(quota);
        }

        let [gk, df, mf, st] = slots;
        match (gk, df, mf, st) {
            (Some(gk), Some(df), Some(mf), Some(st)) => Ok(Self { entries: [gk, df, mf, st] }),
            (gk, df, mf, st) => {
                let missing: Vec<&str> = [gk.is_none(), df.is_none(), mf.is_none(), st.is_none()]
                    .iter()
                    .zip(Role::ALL)
                    .filter(|(absent, _)| **absent)
                    .map(|(_, role)| role.key())
                    .collect();
                Err(RosterError::InvalidQuota(format!("missing roles: {}", missing.join(", "))))
            }
        }
    }

    pub fn get(&self, role: Role) -> &RoleQuota {
        &self.entries[role.index()]
    }

    /// Full squad size (sum of every role's max).
    pub fn squad_size(&self) -> usize {
        self.entries.iter().map(|q| q.max).sum()
    }
}
