//! Terminal rendering of the roster view and notices.

use std::fmt::Write;

use fanta_core::{CreditStatus, Notice, NoticeLevel, RosterView, SectionView};

pub const EMPTY_SECTION_TEXT: &str = "Nessun giocatore aggiunto";

pub fn status_tag(status: CreditStatus) -> &'static str {
    match status {
        CreditStatus::Ok => "ok",
        CreditStatus::Warning => "warning",
        CreditStatus::Danger => "danger",
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let icon = match notice.level {
        NoticeLevel::Success => "✅",
        NoticeLevel::Warning => "⚠️",
        NoticeLevel::Error => "❌",
    };
    format!("{} {}", icon, notice.message)
}

/// Full roster: team name, credits panel, then one section per role.
pub fn render_view(view: &RosterView<'_>) -> String {
    let mut out = String::new();

    if !view.team_name.is_empty() {
        let _ = writeln!(out, "Squadra: {}", view.team_name);
    }
    let _ = writeln!(
        out,
        "Crediti: totali {} | spesi {} | rimanenti {} [{}]",
        view.total_credits,
        view.spent_credits,
        view.remaining_credits,
        status_tag(view.credit_status)
    );
    let _ = writeln!(out, "Giocatori: {}/{}", view.total_players, view.squad_size);

    for section in &view.sections {
        out.push('\n');
        render_section(&mut out, section);
    }

    if view.complete {
        let _ = writeln!(out, "\nRosa completa!");
    }

    out
}

fn render_section(out: &mut String, section: &SectionView<'_>) {
    let full = if section.can_add { "" } else { " (completo)" };
    let _ = writeln!(
        out,
        "{} {} {}/{}{}",
        section.icon,
        section.label,
        section.players.len(),
        section.max,
        full
    );

    if section.players.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_SECTION_TEXT);
        return;
    }

    for player in section.players {
        let _ = writeln!(
            out,
            "  {}  {}  {} {}",
            player.id,
            player.name,
            player.cost,
            player.cost_unit()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanta_core::{Player, Role, Team};

    #[test]
    fn test_render_empty_roster() {
        let team = Team::new(500, "");
        let view = RosterView::new(&team, 50);

        let text = render_view(&view);

        assert!(!text.contains("Squadra:"));
        assert!(text.contains("Crediti: totali 500 | spesi 0 | rimanenti 500 [ok]"));
        assert!(text.contains("Giocatori: 0/25"));
        assert!(text.contains("GK Portieri 0/3\n  Nessun giocatore aggiunto"));
        assert!(text.contains("AT Attaccanti 0/6"));
        assert!(!text.contains("Rosa completa!"));
    }

    #[test]
    fn test_render_players_and_full_tag() {
        let mut team = Team::new(100, "Render FC");
        for name in ["Uno", "Due", "Tre"] {
            team.add_player(Player::new(name, 1, Role::Goalkeeper)).unwrap();
        }
        let view = RosterView::new(&team, 50);

        let text = render_view(&view);

        assert!(text.starts_with("Squadra: Render FC\n"));
        assert!(text.contains("GK Portieri 3/3 (completo)"));
        assert!(text.contains("Uno  1 Credito"));
        assert!(text.contains("rimanenti 97 [ok]"));
    }

    #[test]
    fn test_render_negative_remaining_as_danger() {
        let mut team = Team::new(100, "");
        team.add_player(Player::new("Caro", 90, Role::Striker)).unwrap();
        team.set_credits(50);

        let text = render_view(&RosterView::new(&team, 50));

        assert!(text.contains("rimanenti -40 [danger]"));
        assert!(text.contains("Caro  90 Crediti"));
    }

    #[test]
    fn test_render_notice_levels() {
        assert_eq!(render_notice(&Notice::success("ok")), "✅ ok");
        assert_eq!(render_notice(&Notice::error("no")), "❌ no");
        assert!(render_notice(&Notice::warning("hm")).ends_with("hm"));
    }
}
