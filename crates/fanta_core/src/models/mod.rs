pub mod player;
pub mod role;
pub mod team;


pub use player::{Player, PlayerId};
pub use role::{QuotaTable, Role, RoleQuota};
pub use team::{RosterRecord, Team, TeamRecord};
