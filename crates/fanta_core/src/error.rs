use thiserror::Error;

use crate::models::{PlayerId, Role};
use crate::validation::ValidationError;

/// Rejections raised by the roster ledger itself.
///
/// All of them are recoverable: the ledger is left untouched and the message is
/// meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Hai raggiunto il numero massimo di {label} ({max})")]
    QuotaExceeded { role: Role, label: &'static str, max: usize },

    #[error("Crediti insufficienti: costo {cost}, rimanenti {remaining}")]
    InsufficientCredits { cost: u32, remaining: i64 },

    #[error("Il giocatore {id} è già in rosa")]
    DuplicatePlayer { id: PlayerId },

    #[error("Tabella delle quote non valida: {0}")]
    InvalidQuota(String),
}

/// Problems found while rebuilding a ledger from a stored record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Crediti totali negativi nel salvataggio: {0}")]
    NegativeCredits(i64),

    #[error("Il giocatore {id} è nella lista {list} ma ha ruolo {role}")]
    RoleMismatch { id: PlayerId, list: Role, role: Role },

    #[error("Giocatore salvato non valido: {0}")]
    Roster(#[from] RosterError),
}

/// Any rejection the controller can surface to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}
