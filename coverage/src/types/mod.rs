//! Domain types for damage relations and coverage

mod coverage;
mod moves;
mod pokemon_type;
mod relation;
mod species;
mod stats;

pub use coverage::{HasTypeCoverage, TypeCoverage};
pub use moves::{DamageClass, Generation, Move, MoveMeta, MoveSet};
pub use pokemon_type::{Type, TypeRef};
pub use relation::{DamageRelation, Multiplier, RelationFamily, combine_defensive};
pub use species::Species;
pub use stats::{Stat, StatSet};
