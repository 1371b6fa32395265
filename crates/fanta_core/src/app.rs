//! Roster controller.
//!
//! Turns raw user input into validated ledger operations and persists the
//! roster after every successful mutation. Each operation reports back with a
//! [`Notice`] for the presentation layer.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::config::RosterConfig;
use crate::error::ActionError;
use crate::export::{lineup_sheet, sheet_file_name};
use crate::models::{Player, PlayerId, Role, Team};
use crate::save::{FileStore, KeyValueStore, RosterStorage};
use crate::validation::{self, ValidationError};
use crate::view::RosterView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ActionError> for Notice {
    fn from(err: ActionError) -> Self {
        Notice::error(err.to_string())
    }
}

/// Printable lineup ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupExport {
    pub file_name: String,
    pub contents: String,
}

/// Owns the single active roster and its persistence adapter.
pub struct RosterApp<S: KeyValueStore> {
    team: Option<Team>,
    storage: RosterStorage<S>,
    low_credit_threshold: i64,
}

impl RosterApp<FileStore> {
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(config.file_storage(), config.low_credit_threshold)
    }
}

impl<S: KeyValueStore> RosterApp<S> {
    pub fn new(storage: RosterStorage<S>, low_credit_threshold: i64) -> Self {
        Self { team: None, storage, low_credit_threshold }
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    pub fn storage(&self) -> &RosterStorage<S> {
        &self.storage
    }

    /// Snapshot for rendering; `None` until credits or a name are set.
    pub fn view(&self) -> Option<RosterView<'_>> {
        self.team.as_ref().map(|team| RosterView::new(team, self.low_credit_threshold))
    }

    /// Restore the stored roster, if any.
    ///
    /// A record that fails validation is logged and left in place; the
    /// session starts without a roster.
    pub fn bootstrap(&mut self) -> Option<Notice> {
        let record = self.storage.load()?;
        match Team::from_record(record) {
            Ok(team) => {
                debug!(players = team.total_players(), "roster restored");
                self.team = Some(team);
                Some(Notice::success("Dati caricati con successo!"))
            }
            Err(e) => {
                warn!(error = %e, "stored roster rejected");
                Some(Notice::warning(format!("Salvataggio ignorato: {}", e)))
            }
        }
    }

    pub fn set_credits(&mut self, raw: &str) -> Notice {
        let credits = match validation::parse_credits(raw) {
            Ok(credits) => credits,
            Err(e) => return ActionError::from(e).into(),
        };

        match self.team.as_mut() {
            Some(team) => team.set_credits(credits),
            None => self.team = Some(Team::new(credits, "")),
        }
        info!(credits, "credits set");

        self.persisted(format!("Crediti impostati: {}", credits))
    }

    pub fn set_team_name(&mut self, raw: &str) -> Notice {
        let name = match validation::team_name(raw) {
            Ok(name) => name.to_string(),
            Err(e) => return ActionError::from(e).into(),
        };

        match self.team.as_mut() {
            Some(team) => team.set_team_name(name.as_str()),
            None => self.team = Some(Team::new(0, name.as_str())),
        }
        info!(team_name = %name, "team name set");

        self.persisted(format!("Nome squadra impostato: {}", name))
    }

    pub fn add_player(&mut self, role: Role, raw_name: &str, raw_cost: &str) -> Notice {
        match self.try_add_player(role, raw_name, raw_cost) {
            Ok(name) => self.persisted(format!("{} aggiunto alla squadra!", name)),
            Err(e) => {
                debug!(error = %e, %role, "add rejected");
                e.into()
            }
        }
    }

    fn try_add_player(&mut self, role: Role, raw_name: &str, raw_cost: &str) -> Result<String, ActionError> {
        let team = self.team.as_mut().ok_or(ValidationError::NoRoster)?;
        let name = validation::player_name(raw_name)?;
        let cost = validation::parse_cost(raw_cost)?;

        let player = Player::new(name, cost, role);
        info!(id = %player.id, %role, cost, "adding player");
        team.add_player(player)?;
        Ok(name.to_string())
    }

    /// Remove a player by id. Unknown ids (or no roster) are a silent no-op.
    pub fn remove_player(&mut self, id: &str) -> Option<Notice> {
        let removed = self.team.as_mut()?.remove_player(&PlayerId::from(id))?;
        info!(id = %removed.id, cost = removed.cost, "player removed");
        Some(self.persisted(format!("{} rimosso dalla squadra", removed.name)))
    }

    /// Persist the current roster on request.
    pub fn save(&mut self) -> Notice {
        let team = match self.team.as_ref() {
            Some(team) => team,
            None => return Notice::warning("Niente da salvare"),
        };

        if self.storage.save(&team.to_record()) {
            info!(players = team.total_players(), "team saved");
            Notice::success("Squadra salvata")
        } else {
            Notice::error("Salvataggio non riuscito")
        }
    }

    /// Wipe storage and drop the in-memory roster.
    pub fn reset(&mut self) -> Notice {
        self.team = None;
        if self.storage.clear() {
            info!("roster reset");
            Notice::success("Tutti i dati sono stati resettati")
        } else {
            Notice::warning("Rosa resettata, ma i dati salvati non sono stati rimossi")
        }
    }

    /// Build the lineup sheet; requires at least one drafted player.
    pub fn export(&self) -> Result<LineupExport, ActionError> {
        let team = self
            .team
            .as_ref()
            .filter(|team| team.total_players() > 0)
            .ok_or(ValidationError::EmptyRoster)?;

        Ok(LineupExport { file_name: sheet_file_name(team), contents: lineup_sheet(team) })
    }

    /// Save after a successful mutation; a failed save downgrades the notice.
    fn persisted(&mut self, message: impl Into<String>) -> Notice {
        let message = message.into();
        let saved = match self.team.as_ref() {
            Some(team) => self.storage.save(&team.to_record()),
            None => false,
        };

        if saved {
            debug!("team saved automatically");
            Notice::success(message)
        } else {
            Notice::warning(format!("{} (non salvato)", message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::save::MemoryStore;

    fn app() -> RosterApp<MemoryStore> {
        RosterApp::new(RosterStorage::new(MemoryStore::new()), 50)
    }

    #[test]
    fn test_add_requires_credits_first() {
        let mut app = app();

        let notice = app.add_player(Role::Defender, "Bremer", "20");

        assert!(notice.is_error());
        assert_eq!(notice.message, ValidationError::NoRoster.to_string());
        assert!(app.team().is_none());
    }

    #[test]
    fn test_set_credits_creates_and_persists_roster() {
        let mut app = app();

        let notice = app.set_credits("500");

        assert_eq!(notice, Notice::success("Crediti impostati: 500"));
        assert_eq!(app.team().unwrap().total_credits(), 500);
        assert!(app.storage().exists());
    }

    #[test]
    fn test_invalid_credits_rejected() {
        let mut app = app();
        for raw in ["", "0", "-5", "tanti"] {
            let notice = app.set_credits(raw);
            assert!(notice.is_error(), "{:?} should be rejected", raw);
        }
        assert!(app.team().is_none());
        assert!(!app.storage().exists());
    }

    #[test]
    fn test_team_name_before_credits_creates_zero_budget_roster() {
        let mut app = app();

        let notice = app.set_team_name("  Atletico Ma Non Troppo ");

        assert_eq!(notice.level, NoticeLevel::Success);
        let team = app.team().unwrap();
        assert_eq!(team.team_name(), "Atletico Ma Non Troppo");
        assert_eq!(team.total_credits(), 0);

        assert!(app.set_team_name("   ").is_error());
    }

    #[test]
    fn test_add_and_remove_flow() {
        let mut app = app();
        app.set_credits("500");

        let notice = app.add_player(Role::Goalkeeper, " Sommer ", "50");
        assert_eq!(notice, Notice::success("Sommer aggiunto alla squadra!"));

        let team = app.team().unwrap();
        assert_eq!(team.remaining_credits(), 450);
        let id = team.players_by_role(Role::Goalkeeper)[0].id.to_string();

        let notice = app.remove_player(&id).unwrap();
        assert_eq!(notice, Notice::success("Sommer rimosso dalla squadra"));
        assert_eq!(app.team().unwrap().remaining_credits(), 500);

        assert!(app.remove_player(&id).is_none());
    }

    #[test]
    fn test_add_validation_errors() {
        let mut app = app();
        app.set_credits("100");

        assert_eq!(app.add_player(Role::Striker, "  ", "10").message, ValidationError::EmptyPlayerName.to_string());
        assert_eq!(app.add_player(Role::Striker, "Kean", "0").message, ValidationError::InvalidCost.to_string());
        assert_eq!(app.add_player(Role::Striker, "Kean", "abc").message, ValidationError::InvalidCost.to_string());
        assert_eq!(app.team().unwrap().total_players(), 0);
    }

    #[test]
    fn test_ledger_errors_surface_verbatim() {
        let mut app = app();
        app.set_credits("500");
        app.add_player(Role::Goalkeeper, "GK", "50");

        let notice = app.add_player(Role::Striker, "Big Money", "500");
        let expected = RosterError::InsufficientCredits { cost: 500, remaining: 450 };
        assert_eq!(notice, Notice::error(expected.to_string()));
        assert_eq!(app.team().unwrap().remaining_credits(), 450);
    }

    #[test]
    fn test_bootstrap_restores_saved_roster() {
        let mut store = MemoryStore::new();
        {
            let mut first = RosterApp::new(RosterStorage::new(store.clone()), 50);
            first.set_credits("300");
            first.add_player(Role::Midfielder, "Frattesi", "25");
            let record = first.team().unwrap().to_record();
            store.set("fantacalcio_team", &serde_json::to_vec(&record).unwrap()).unwrap();
        }

        let mut second = RosterApp::new(RosterStorage::new(store), 50);
        assert!(second.team().is_none());

        let notice = second.bootstrap().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        let team = second.team().unwrap();
        assert_eq!(team.remaining_credits(), 275);
        assert_eq!(team.players_by_role(Role::Midfielder)[0].name, "Frattesi");
    }

    #[test]
    fn test_bootstrap_without_record() {
        let mut app = app();
        assert!(app.bootstrap().is_none());
        assert!(app.team().is_none());
    }

    #[test]
    fn test_bootstrap_ignores_invalid_record() {
        let mut store = MemoryStore::new();
        let mut record = Team::new(100, "").to_record();
        record.total_credits = -1;
        store.set("fantacalcio_team", &serde_json::to_vec(&record).unwrap()).unwrap();

        let mut app = RosterApp::new(RosterStorage::new(store), 50);
        let notice = app.bootstrap().unwrap();

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(app.team().is_none());
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut app = RosterApp::new(RosterStorage::new(MemoryStore::with_quota(8)), 50);

        let notice = app.set_credits("500");

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(app.team().unwrap().remaining_credits(), 500);
        assert!(!app.storage().exists());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = app();
        app.set_credits("500");
        assert!(app.storage().exists());

        let notice = app.reset();

        assert_eq!(notice.level, NoticeLevel::Success);
        assert!(app.team().is_none());
        assert!(!app.storage().exists());
        assert!(app.view().is_none());
    }

    #[test]
    fn test_export_requires_players() {
        let mut app = app();
        assert_eq!(app.export(), Err(ActionError::Validation(ValidationError::EmptyRoster)));

        app.set_credits("200");
        assert!(app.export().is_err());

        app.set_team_name("Export United");
        app.add_player(Role::Defender, "Buongiorno", "15");
        let export = app.export().unwrap();
        assert_eq!(export.file_name, "Export United_Fantacalcio.txt");
        assert!(export.contents.contains("Buongiorno"));
    }

    #[test]
    fn test_save_without_roster() {
        let mut app = app();
        assert_eq!(app.save().level, NoticeLevel::Warning);

        app.set_credits("10");
        assert_eq!(app.save(), Notice::success("Squadra salvata"));
    }

    #[test]
    fn test_save_failure_reports_error() {
        let mut app = RosterApp::new(RosterStorage::new(MemoryStore::with_quota(8)), 50);
        let mutation = app.set_credits("500");
        assert_eq!(mutation, Notice::warning("Crediti impostati: 500 (non salvato)"));

        let notice = app.save();

        assert_eq!(notice, Notice::error("Salvataggio non riuscito"));
        assert_eq!(app.team().unwrap().total_credits(), 500);
        assert!(!app.storage().exists());
    }

    #[test]
    fn test_quota_notice_in_italian() {
        let mut app = app();
        app.set_credits("500");
        for name in ["Uno", "Due", "Tre"] {
            app.add_player(Role::Goalkeeper, name, "1");
        }

        let notice = app.add_player(Role::Goalkeeper, "Quattro", "1");

        assert_eq!(notice, Notice::error("Hai raggiunto il numero massimo di Portieri (3)"));
    }

    #[test]
    fn test_credits_lowered_below_spend_shows_danger() {
        let mut app = app();
        app.set_credits("200");
        app.add_player(Role::Striker, "Vlahovic", "150");

        let notice = app.set_credits("100");
        assert_eq!(notice.level, NoticeLevel::Success);

        let view = app.view().unwrap();
        assert_eq!(view.remaining_credits, -50);
        assert_eq!(view.credit_status, crate::view::CreditStatus::Danger);
    }
}
