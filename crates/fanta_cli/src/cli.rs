use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use fanta_core::config::{DEFAULT_DATA_DIR, DEFAULT_LOW_CREDITS};
use fanta_core::save::DEFAULT_STORAGE_KEY;
use fanta_core::{KeyValueStore, Notice, NoticeLevel, Role, RosterApp, RosterConfig};

use crate::render::{render_notice, render_view};

#[derive(Parser, Debug)]
#[command(name = "fanta")]
#[command(version, about = "Build a fantacalcio roster within a credit budget", long_about = None)]
pub struct Cli {
    /// Directory holding the saved roster
    #[arg(long, env = "FANTA_DATA_DIR", default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: PathBuf,

    /// Storage key of the roster record
    #[arg(long, env = "FANTA_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY, global = true)]
    pub key: String,

    /// Remaining credits below this are flagged as a warning
    #[arg(long, env = "FANTA_LOW_CREDITS", default_value_t = DEFAULT_LOW_CREDITS, global = true)]
    pub low_credits: i64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current roster
    Show {
        /// Print the roster view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set (or change) the credit budget
    Credits {
        /// Amount of credits
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the team name
    Name {
        /// Team name
        name: String,
    },

    /// Draft a player into a role (goalkeepers, defenders, midfielders, strikers)
    Add {
        role: Role,
        name: String,
        /// Player cost in credits
        #[arg(allow_hyphen_values = true)]
        cost: String,
    },

    /// Remove a player by id
    Remove { id: String },

    /// Save the roster now
    Save,

    /// Delete the saved roster
    Reset {
        /// Confirm the irreversible reset
        #[arg(long)]
        yes: bool,
    },

    /// Write a plain-text lineup sheet
    Export {
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

impl Cli {
    pub fn config(&self) -> RosterConfig {
        RosterConfig::new(&self.data_dir)
            .with_storage_key(self.key.clone())
            .with_low_credit_threshold(self.low_credits)
    }
}

/// Run one command against the stored roster.
///
/// Notices go to `out`, errors to `err`. Returns `false` when the command was
/// rejected so the caller can set a failing exit status.
pub fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    let mut app = RosterApp::from_config(&cli.config());
    if let Some(notice) = app.bootstrap() {
        tracing::debug!(message = %notice.message, "bootstrap");
        if notice.level != NoticeLevel::Success {
            writeln!(err, "{}", render_notice(&notice))?;
        }
    }

    let notice = match &cli.command {
        Command::Show { json } => {
            show(&app, *json, out)?;
            return Ok(true);
        }
        Command::Credits { amount } => app.set_credits(amount),
        Command::Name { name } => app.set_team_name(name),
        Command::Add { role, name, cost } => app.add_player(*role, name, cost),
        Command::Remove { id } => match app.remove_player(id) {
            Some(notice) => notice,
            None => {
                writeln!(out, "Nessun giocatore con id {}", id)?;
                return Ok(true);
            }
        },
        Command::Save => app.save(),
        Command::Reset { yes } => {
            if !*yes {
                writeln!(err, "{}", render_notice(&Notice::warning("Il reset è irreversibile: aggiungi --yes per confermare")))?;
                return Ok(false);
            }
            app.reset()
        }
        Command::Export { out: dir } => match app.export() {
            Ok(export) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Impossibile creare la cartella {}", dir.display()))?;
                let path = dir.join(&export.file_name);
                std::fs::write(&path, export.contents)
                    .with_context(|| format!("Impossibile scrivere la formazione in {}", path.display()))?;
                Notice::success(format!("Formazione esportata in {}", path.display()))
            }
            Err(e) => e.into(),
        },
    };

    if notice.is_error() {
        writeln!(err, "{}", render_notice(&notice))?;
        return Ok(false);
    }

    writeln!(out, "{}", render_notice(&notice))?;
    if let Some(view) = app.view() {
        writeln!(out)?;
        write!(out, "{}", render_view(&view))?;
    }
    Ok(true)
}

fn show<S: KeyValueStore>(app: &RosterApp<S>, json: bool, out: &mut impl Write) -> Result<()> {
    match app.view() {
        Some(view) if json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
        Some(view) => write!(out, "{}", render_view(&view))?,
        None => writeln!(out, "Nessuna rosa. Inizia con `fanta credits <crediti>`.")?,
    }
    Ok(())
}
