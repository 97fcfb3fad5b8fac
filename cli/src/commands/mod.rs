//! Command implementations
//!
//! Lookups go straight to the data source. Roster commands load the roster
//! file, apply one change and write it back.

mod battle;
mod lookup;
mod pokemon;
mod team;

pub use battle::Battle;
pub use lookup::Lookup;
pub use pokemon::PokemonCommand;
pub use team::TeamCommand;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use trainer_coverage::Pokedex;
use trainer_records::{DataSource, ResourceKind};
use trainer_team::{Roster, Tracker};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show species details, e.g. `species 1 bulbasaur`
    Species(Lookup),

    /// Show a type's damage relations, e.g. `type 16 dragon`
    Type(Lookup),

    /// Show move details, e.g. `move 15 cut`
    Move(Lookup),

    /// Track individual Pokemon
    #[command(subcommand)]
    Pokemon(PokemonCommand),

    /// Record battles and the effort values they yield
    Battle(Battle),

    /// Build teams out of tracked Pokemon
    #[command(subcommand)]
    Team(TeamCommand),
}

impl Command {
    pub fn run<S: DataSource, W: Write>(
        self,
        dex: &mut Pokedex<S>,
        path: &Path,
        out: &mut W,
    ) -> Result<()> {
        match self {
            Command::Species(args) => args.execute(ResourceKind::Pokemon, dex, out),
            Command::Type(args) => args.execute(ResourceKind::Type, dex, out),
            Command::Move(args) => args.execute(ResourceKind::Move, dex, out),
            Command::Pokemon(cmd) => cmd.execute(dex, path, out),
            Command::Battle(cmd) => cmd.execute(dex, path, out),
            Command::Team(cmd) => cmd.execute(dex, path, out),
        }
    }
}

pub(crate) fn load_tracker<S: DataSource>(path: &Path, dex: &mut Pokedex<S>) -> Result<Tracker> {
    let roster = trainer_team::load(path, dex)
        .with_context(|| format!("Failed to load roster from {}", path.display()))?;
    Ok(Tracker::new(roster))
}

pub(crate) fn save_roster(roster: &Roster, path: &Path) -> Result<()> {
    trainer_team::save(roster, path)
        .with_context(|| format!("Failed to save roster to {}", path.display()))
}
