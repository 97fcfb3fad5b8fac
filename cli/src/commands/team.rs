use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use trainer_coverage::Pokedex;
use trainer_records::DataSource;
use trainer_team::TeamPosition;

use super::{load_tracker, save_roster};
use crate::display;

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// Create an empty team
    Create {
        name: String,

        /// Make it the active team
        #[arg(long)]
        active: bool,
    },

    /// Delete a team; its Pokemon stay tracked
    Remove { team: u32 },

    /// Put a tracked Pokemon at a position, or empty the position
    Set {
        team: u32,

        /// first..sixth or 1..6
        position: String,

        /// Tracked Pokemon id; leave out to empty the position
        pokemon: Option<u32>,
    },

    /// Show the active team, or change it
    Active {
        team: Option<u32>,

        /// Unset the active team
        #[arg(long, conflicts_with = "team")]
        clear: bool,
    },

    /// List teams; the active one is starred
    List,

    /// Show a team's positions and combined coverage
    Show {
        /// Defaults to the active team
        team: Option<u32>,
    },
}

impl TeamCommand {
    pub fn execute<S: DataSource, W: Write>(
        self,
        dex: &mut Pokedex<S>,
        path: &Path,
        out: &mut W,
    ) -> Result<()> {
        let mut tracker = load_tracker(path, dex)?;

        match self {
            TeamCommand::Create { name, active } => {
                let id = tracker.create_team(&name, active);
                save_roster(tracker.roster(), path)?;
                writeln!(out, "Created team {id}")?;
            }
            TeamCommand::Remove { team } => {
                let removed = tracker.roster_mut().remove_team(team)?;
                save_roster(tracker.roster(), path)?;
                writeln!(out, "Removed team {}", removed.name)?;
            }
            TeamCommand::Set {
                team,
                position,
                pokemon,
            } => {
                let position: TeamPosition = position.parse()?;
                tracker.roster_mut().assign(team, position, pokemon)?;
                save_roster(tracker.roster(), path)?;
                let lineup = tracker.roster().lineup(team)?;
                writeln!(out, "{}", display::team_details(&lineup))?;
            }
            TeamCommand::Active { team, clear } => {
                if clear {
                    tracker.roster_mut().set_active_team(None)?;
                    save_roster(tracker.roster(), path)?;
                } else if let Some(team) = team {
                    tracker.roster_mut().set_active_team(Some(team))?;
                    save_roster(tracker.roster(), path)?;
                }

                match tracker.roster().active_team() {
                    Some(active) => writeln!(out, "{}", display::team_line(active, true))?,
                    None => writeln!(out, "No active team")?,
                }
            }
            TeamCommand::List => {
                let roster = tracker.roster();
                let mut any = false;
                for team in roster.teams() {
                    any = true;
                    let active = roster.active_team_id() == Some(team.id);
                    writeln!(out, "{}", display::team_line(team, active))?;
                }
                if !any {
                    writeln!(out, "No teams")?;
                }
            }
            TeamCommand::Show { team } => {
                let roster = tracker.roster();
                let team = team
                    .or(roster.active_team_id())
                    .context("No team given and no active team set")?;
                let lineup = roster.lineup(team)?;
                writeln!(out, "{}", display::team_details(&lineup))?;
            }
        }
        Ok(())
    }
}
