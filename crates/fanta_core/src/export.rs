//! Plain-text lineup sheet.

use std::fmt::Write;

use crate::models::{Role, Team};

const DEFAULT_SHEET_TITLE: &str = "Formazione";

/// `<team name or "Formazione">_Fantacalcio.txt`
pub fn sheet_file_name(team: &Team) -> String {
    let title = match team.team_name().trim() {
        "" => DEFAULT_SHEET_TITLE,
        name => name,
    };
    let stem: String = title
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') { '_' } else { c })
        .collect();
    format!("{}_Fantacalcio.txt", stem)
}

/// Render the roster as a printable sheet: header, credit totals, then one
/// block per role in enumeration order.
pub fn lineup_sheet(team: &Team) -> String {
    let mut out = String::new();
    let title = match team.team_name() {
        "" => DEFAULT_SHEET_TITLE,
        name => name,
    };

    // Writing into a String never fails.
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(
        out,
        "Crediti: {} totali, {} spesi, {} rimanenti",
        team.total_credits(),
        team.total_spent(),
        team.remaining_credits()
    );
    let _ = writeln!(out, "Giocatori: {}/{}", team.total_players(), team.quotas().squad_size());

    for role in Role::ALL {
        let quota = team.quotas().get(role);
        let players = team.players_by_role(role);
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {} {}/{}", quota.icon, quota.label, players.len(), quota.max);
        for (idx, player) in players.iter().enumerate() {
            let _ = writeln!(out, "{:>2}. {:<28} {:>4} {}", idx + 1, player.name, player.cost, player.cost_unit());
        }
    }

    out
}
