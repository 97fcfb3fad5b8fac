mod tests;

use serde::Deserialize;

use crate::resource::NamedResource;

/// `GET /type/{id or name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelationsRecord,
}

/// The six relation lists published for a type. Quarter and quadruple
/// relations never appear here; they only arise when two types combine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DamageRelationsRecord {
    pub no_damage_to: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub double_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
}

impl DamageRelationsRecord {
    /// Lists keyed by their API field name, in a fixed order.
    pub fn entries(&self) -> [(&'static str, &[NamedResource]); 6] {
        [
            ("no_damage_to", &self.no_damage_to),
            ("half_damage_to", &self.half_damage_to),
            ("double_damage_to", &self.double_damage_to),
            ("no_damage_from", &self.no_damage_from),
            ("half_damage_from", &self.half_damage_from),
            ("double_damage_from", &self.double_damage_from),
        ]
    }
}

/// `GET /move/{id or name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub effect_chance: Option<u32>,
    pub damage_class: NamedResource,
    #[serde(rename = "type")]
    pub type_: NamedResource,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub meta: Option<MoveMetaRecord>,
}

impl MoveRecord {
    /// Short effect text in the given language, if published.
    pub fn short_effect(&self, language: &str) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.short_effect.as_str())
    }

    /// Long effect text in the given language, if published.
    pub fn effect(&self, language: &str) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.effect.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MoveMetaRecord {
    pub crit_rate: Option<i32>,
    pub drain: Option<i32>,
    pub flinch_chance: Option<i32>,
    pub healing: Option<i32>,
    pub max_hits: Option<i32>,
    pub max_turns: Option<i32>,
    pub min_hits: Option<i32>,
    pub min_turns: Option<i32>,
    pub stat_chance: Option<i32>,
}

/// `GET /pokemon/{id or name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatRecord>,
}

impl PokemonRecord {
    /// Type references ordered by slot.
    pub fn sorted_types(&self) -> Vec<&NamedResource> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| &slot.type_).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}
