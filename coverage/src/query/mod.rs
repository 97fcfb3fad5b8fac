//! Matchup queries over a defender's types
//!
//! Species delegates its vulnerability, resistance and immunity questions
//! here; the helpers also work on any ad-hoc list of types.

mod matchup;

pub use matchup::{
    damage_relation_from_types,
    immunities,
    is_immune_to,
    is_weak_to,
    is_weak_to_any,
    resistances,
    resists,
    resists_all,
    weaknesses,
};
