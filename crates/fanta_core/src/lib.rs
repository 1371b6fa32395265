//! # fanta_core - Fantacalcio roster ledger
//!
//! Bookkeeping for a fantasy-football draft: a fixed credit budget spread over
//! four fixed-size role quotas (3 goalkeepers, 8 defenders, 8 midfielders,
//! 6 strikers).
//!
//! ## Features
//! - `Team` ledger enforcing quota and budget on every mutation
//! - JSON record round-trip compatible with the web client storage format
//! - Key-value persistence adapter with file and in-memory stores
//! - `RosterApp` controller that validates raw input and persists after each change

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod save;
pub mod validation;
pub mod view;

pub use app::{LineupExport, Notice, NoticeLevel, RosterApp};
pub use config::RosterConfig;
pub use error::{ActionError, RecordError, RosterError};
pub use models::{Player, PlayerId, QuotaTable, Role, RoleQuota, RosterRecord, Team, TeamRecord};
pub use save::{FileStore, KeyValueStore, MemoryStore, RosterStorage, StorageError};
pub use validation::{parse_int, ValidationError};
pub use view::{CreditStatus, RosterView, SectionView};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
