//! Fixture records shaped like live API responses, for tests in this and
//! downstream crates.

use crate::resource::ResourceKind;
use crate::source::MemorySource;

pub const TYPES_JSON: &str = include_str!("../fixtures/types.json");
pub const MOVES_JSON: &str = include_str!("../fixtures/moves.json");
pub const POKEMON_JSON: &str = include_str!("../fixtures/pokemon.json");

/// A source holding all 18 types plus a handful of moves and species.
pub fn fixture_source() -> MemorySource {
    let mut source = MemorySource::new();
    for (kind, body) in [
        (ResourceKind::Type, TYPES_JSON),
        (ResourceKind::Move, MOVES_JSON),
        (ResourceKind::Pokemon, POKEMON_JSON),
    ] {
        if let Err(e) = source.insert_array(kind, body) {
            panic!("fixture {kind} is malformed: {e}");
        }
    }
    source
}
