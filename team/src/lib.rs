//! Tracked Pokemon, teams and the roster they live in.
//!
//! A [`Roster`] owns every tracked [`Pokemon`] by id; a [`Team`] only
//! stores ids in its six positions. The roster is persisted as a
//! [`RosterDocument`] in YAML.

use std::path::PathBuf;

use thiserror::Error;
use trainer_coverage::{DexError, StatSet};

pub mod document;
pub mod pokemon;
pub mod roster;
pub mod store;
pub mod team;
pub mod tracker;

pub use document::RosterDocument;
pub use pokemon::{HeldItem, Pokemon};
pub use roster::Roster;
pub use store::{backup_path, load, save};
pub use team::{Team, TeamLineup, TeamPosition};
pub use tracker::Tracker;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid team position '{0}', expected first..sixth or 1..6")]
    InvalidPosition(String),

    #[error("Unknown held item '{0}'")]
    InvalidItem(String),

    #[error("Unknown team {0}")]
    UnknownTeam(u32),

    #[error("Unknown pokemon {0}")]
    UnknownPokemon(u32),

    #[error("Pokemon {0} is already tracked")]
    DuplicatePokemon(u32),

    #[error("Team {0} already exists")]
    DuplicateTeam(u32),

    #[error("Pokemon {pokemon} has effort values over the limit: {evs}")]
    EffortValuesOverCap { pokemon: u32, evs: StatSet },

    #[error("Team '{team}' references unknown pokemon {pokemon} at position {position}")]
    DanglingReference {
        team: String,
        position: TeamPosition,
        pokemon: u32,
    },

    #[error("Failed to look up {resource}: {source}")]
    Lookup {
        resource: String,
        #[source]
        source: DexError,
    },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
