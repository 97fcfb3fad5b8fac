//! Damage relations and type coverage.
//!
//! Everything in this crate is about one question: how much damage does one
//! type deal to, or take from, another, and what does that look like when
//! types are combined on a species, spread over a move set, or stacked
//! across a whole team.
//!
//! ```text
//! trainer-records (raw API records, DataSource)
//!        │
//!        ▼
//! trainer-coverage (relations, coverage, Pokedex) ← THIS CRATE
//!        │
//!        ├─> trainer-team (tracked Pokemon, teams, roster file)
//!        └─> trainer-cli
//! ```
//!
//! # Main Types
//!
//! - [`DamageRelation`] - the twelve "to"/"from" relations and their multipliers
//! - [`TypeCoverage`] - a table of type references per relation
//! - [`HasTypeCoverage`] - implemented by everything that has a coverage
//! - [`Type`], [`Move`], [`MoveSet`], [`Species`]
//! - [`Pokedex`] - builds the above from a [`DataSource`](trainer_records::DataSource)
//!
//! # Example Usage
//!
//! ```ignore
//! use trainer_coverage::{DamageRelation, Pokedex};
//! use trainer_records::testing::fixture_source;
//!
//! let mut dex = Pokedex::new(fixture_source());
//! let gengar = dex.species(&"gengar".parse()?)?;
//! let psychic = dex.type_(&"psychic".parse()?)?;
//!
//! assert_eq!(
//!     gengar.damage_relation_from_type(psychic.type_ref()),
//!     DamageRelation::DoubleDamageFrom,
//! );
//! ```

use thiserror::Error;

pub mod dex;
pub mod query;
pub mod types;

pub use dex::{DexError, Pokedex};
pub use types::{
    DamageClass, DamageRelation, Generation, HasTypeCoverage, Move, MoveMeta, MoveSet, Multiplier,
    RelationFamily, Species, Stat, StatSet, Type, TypeCoverage, TypeRef, combine_defensive,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Unknown damage relation: {0}")]
    UnknownRelation(String),

    #[error("Unknown damage class: {0}")]
    UnknownDamageClass(String),

    #[error("Unknown generation: {0}")]
    UnknownGeneration(String),

    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    #[error("A species needs at least one type")]
    NoTypes,

    #[error("A species has at most two types, got {0}")]
    TooManyTypes(usize),

    #[error(transparent)]
    Record(#[from] trainer_records::RecordError),
}
