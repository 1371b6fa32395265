use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Player, PlayerId, QuotaTable, Role};
use crate::error::{RecordError, RosterError};

/// Roster ledger: credit budget plus the players drafted for each role.
///
/// Invariants kept by every mutator:
/// - each role holds at most its quota `max`
/// - `remaining_credits == total_credits - sum(cost)` over rostered players
/// - player ids are unique across the whole roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    total_credits: i64,
    remaining_credits: i64,
    team_name: String,
    roster: [Vec<Player>; 4],
    quotas: QuotaTable,
}

impl Default for Team {
    fn default() -> Self {
        Self::new(0, "")
    }
}

impl Team {
    pub fn new(initial_credits: u32, team_name: impl Into<String>) -> Self {
        Self::with_quotas(initial_credits, team_name, QuotaTable::standard())
    }

    pub fn with_quotas(initial_credits: u32, team_name: impl Into<String>, quotas: QuotaTable) -> Self {
        Self {
            total_credits: i64::from(initial_credits),
            remaining_credits: i64::from(initial_credits),
            team_name: team_name.into(),
            roster: Default::default(),
            quotas,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn total_credits(&self) -> i64 {
        self.total_credits
    }

    /// May be negative after the budget was lowered below committed spend.
    pub fn remaining_credits(&self) -> i64 {
        self.remaining_credits
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn quotas(&self) -> &QuotaTable {
        &self.quotas
    }

    pub fn players_by_role(&self, role: Role) -> &[Player] {
        &self.roster[role.index()]
    }

    /// All players in role order, draft order within a role.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.iter().flatten()
    }

    pub fn find_player(&self, id: &PlayerId) -> Option<&Player> {
        self.players().find(|p| &p.id == id)
    }

    // ========================
    // Mutators
    // ========================

    /// Replace the budget; already committed spend is carried over.
    ///
    /// No lower bound: dropping below the spent amount leaves
    /// `remaining_credits` negative until players are removed.
    pub fn set_credits(&mut self, credits: u32) {
        let spent = self.total_spent();
        self.total_credits = i64::from(credits);
        self.remaining_credits = self.total_credits - spent;
    }

    pub fn set_team_name(&mut self, name: impl Into<String>) {
        self.team_name = name.into();
    }

    /// Append a player to the end of its role list.
    ///
    /// Quota is checked before credits, so a full role reports
    /// `QuotaExceeded` even when the player is also unaffordable.
    pub fn add_player(&mut self, player: Player) -> Result<(), RosterError> {
        let role = player.role;

        if !self.can_add_player(role) {
            let quota = self.quotas.get(role);
            return Err(RosterError::QuotaExceeded { role, label: quota.label, max: quota.max });
        }

        if i64::from(player.cost) > self.remaining_credits {
            return Err(RosterError::InsufficientCredits {
                cost: player.cost,
                remaining: self.remaining_credits,
            });
        }

        if self.find_player(&player.id).is_some() {
            return Err(RosterError::DuplicatePlayer { id: player.id });
        }

        self.remaining_credits -= i64::from(player.cost);
        self.roster[role.index()].push(player);
        Ok(())
    }

    /// Remove a player by id, refunding its cost.
    ///
    /// Roles are scanned in [`Role::ALL`] order. Returns `None` and leaves the
    /// ledger untouched when no player matches.
    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        for players in self.roster.iter_mut() {
            if let Some(idx) = players.iter().position(|p| &p.id == id) {
                let player = players.remove(idx);
                self.remaining_credits += i64::from(player.cost);
                return Some(player);
            }
        }
        None
    }

    // ========================
    // Queries
    // ========================

    pub fn can_add_player(&self, role: Role) -> bool {
        self.players_by_role(role).len() < self.quotas.get(role).max
    }

    pub fn is_role_complete(&self, role: Role) -> bool {
        self.players_by_role(role).len() >= self.quotas.get(role).min
    }

    pub fn total_players(&self) -> usize {
        self.roster.iter().map(Vec::len).sum()
    }

    pub fn total_spent(&self) -> i64 {
        self.total_credits - self.remaining_credits
    }

    pub fn is_complete(&self) -> bool {
        Role::ALL.iter().all(|role| self.is_role_complete(*role))
    }

    // ========================
    // Persistence record
    // ========================

    pub fn to_record(&self) -> TeamRecord {
        TeamRecord {
            total_credits: self.total_credits,
            remaining_credits: self.remaining_credits,
            team_name: self.team_name.clone(),
            players: RosterRecord {
                goalkeepers: self.players_by_role(Role::Goalkeeper).to_vec(),
                defenders: self.players_by_role(Role::Defender).to_vec(),
                midfielders: self.players_by_role(Role::Midfielder).to_vec(),
                strikers: self.players_by_role(Role::Striker).to_vec(),
            },
        }
    }

    /// Rebuild a ledger with the standard quota table.
    pub fn from_record(record: TeamRecord) -> Result<Self, RecordError> {
        Self::from_record_with_quotas(record, QuotaTable::standard())
    }

    /// Rebuild a ledger from a stored record.
    ///
    /// Quota overflow, duplicate ids and players filed under the wrong role
    /// are rejected. A stored `remainingCredits` that disagrees with the
    /// players is recomputed so the budget invariant holds.
    pub fn from_record_with_quotas(record: TeamRecord, quotas: QuotaTable) -> Result<Self, RecordError> {
        if record.total_credits < 0 {
            return Err(RecordError::NegativeCredits(record.total_credits));
        }

        let TeamRecord { total_credits, remaining_credits, team_name, players } = record;
        let mut team = Self {
            total_credits,
            remaining_credits: total_credits,
            team_name,
            roster: Default::default(),
            quotas,
        };

        let mut seen = HashSet::new();
        for (list, players) in players.into_lists() {
            for player in players {
                if player.role != list {
                    return Err(RecordError::RoleMismatch { id: player.id, list, role: player.role });
                }
                if !seen.insert(player.id.clone()) {
                    return Err(RosterError::DuplicatePlayer { id: player.id }.into());
                }
                if !team.can_add_player(list) {
                    let quota = team.quotas.get(list);
                    return Err(RosterError::QuotaExceeded { role: list, label: quota.label, max: quota.max }
                        .into());
                }
                // Restored players skip the credit check: a lowered budget may
                // legitimately leave the roster over-spent.
                team.remaining_credits -= i64::from(player.cost);
                team.roster[list.index()].push(player);
            }
        }

        if team.remaining_credits != remaining_credits {
            log::warn!(
                "Stored remainingCredits {} disagrees with roster, using {}",
                remaining_credits,
                team.remaining_credits
            );
        }

        Ok(team)
    }
}

/// Serializable snapshot of a [`Team`], matching the web client storage layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub total_credits: i64,
    /// Derived from the players on load; older records may omit it.
    #[serde(default)]
    pub remaining_credits: i64,
    #[serde(default)]
    pub team_name: String,
    pub players: RosterRecord,
}

/// Player lists keyed by role, in enumeration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterRecord {
    #[serde(default)]
    pub goalkeepers: Vec<Player>,
    #[serde(default)]
    pub defenders: Vec<Player>,
    #[serde(default)]
    pub midfielders: Vec<Player>,
    #[serde(default)]
    pub strikers: Vec<Player>,
}

impl RosterRecord {
    fn into_lists(self) -> [(Role, Vec<Player>); 4] {
        [
            (Role::Goalkeeper, self.goalkeepers),
            (Role::Defender, self.defenders),
            (Role::Midfielder, self.midfielders),
            (Role::Striker, self.strikers),
        ]
    }
}
