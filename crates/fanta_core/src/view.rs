//! Read-only snapshot handed to the presentation layer.

use serde::Serialize;

use crate::models::{Player, Role, Team};

/// Colour band for the remaining-credits figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditStatus {
    Ok,
    Warning,
    Danger,
}

impl CreditStatus {
    pub fn classify(remaining: i64, low_threshold: i64) -> Self {
        if remaining < 0 {
            CreditStatus::Danger
        } else if remaining < low_threshold {
            CreditStatus::Warning
        } else {
            CreditStatus::Ok
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView<'a> {
    pub role: Role,
    pub label: &'static str,
    pub icon: &'static str,
    pub min: usize,
    pub max: usize,
    pub can_add: bool,
    pub players: &'a [Player],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterView<'a> {
    pub total_credits: i64,
    pub spent_credits: i64,
    pub remaining_credits: i64,
    pub credit_status: CreditStatus,
    pub team_name: &'a str,
    pub total_players: usize,
    pub squad_size: usize,
    pub complete: bool,
    pub sections: Vec<SectionView<'a>>,
}

impl<'a> RosterView<'a> {
    pub fn new(team: &'a Team, low_threshold: i64) -> Self {
        let quotas = team.quotas();
        let sections = Role::ALL
            .iter()
            .map(|&role| {
                let quota = quotas.get(role);
                SectionView {
                    role,
                    label: quota.label,
                    icon: quota.icon,
                    min: quota.min,
                    max: quota.max,
                    can_add: team.can_add_player(role),
                    players: team.players_by_role(role),
                }
            })
            .collect();

        Self {
            total_credits: team.total_credits(),
            spent_credits: team.total_spent(),
            remaining_credits: team.remaining_credits(),
            credit_status: CreditStatus::classify(team.remaining_credits(), low_threshold),
            team_name: team.team_name(),
            total_players: team.total_players(),
            squad_size: quotas.squad_size(),
            complete: team.is_complete(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_status_bands() {
        assert_eq!(CreditStatus::classify(-1, 50), CreditStatus::Danger);
        assert_eq!(CreditStatus::classify(0, 50), CreditStatus::Warning);
        assert_eq!(CreditStatus::classify(49, 50), CreditStatus::Warning);
        assert_eq!(CreditStatus::classify(50, 50), CreditStatus::Ok);
    }

    #[test]
    fn test_view_sections_follow_role_order() {
        let mut team = Team::new(100, "View");
        team.add_player(Player::new("Meret", 80, Role::Goalkeeper)).unwrap();

        let view = RosterView::new(&team, 50);

        assert_eq!(view.spent_credits, 80);
        assert_eq!(view.remaining_credits, 20);
        assert_eq!(view.credit_status, CreditStatus::Warning);
        assert_eq!(view.squad_size, 25);
        let roles: Vec<Role> = view.sections.iter().map(|s| s.role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
        assert_eq!(view.sections[0].players.len(), 1);
        assert_eq!(view.sections[0].label, "Portieri");
        assert!(view.sections[0].can_add);
    }
}
