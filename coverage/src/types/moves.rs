//! Moves and four-slot move sets

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use trainer_records::MoveRecord;

use crate::CoverageError;
use crate::types::coverage::{HasTypeCoverage, TypeCoverage};
use crate::types::pokemon_type::{Type, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageClass {
    Status,
    Physical,
    Special,
}

impl DamageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageClass::Status => "status",
            DamageClass::Physical => "physical",
            DamageClass::Special => "special",
        }
    }
}

impl FromStr for DamageClass {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(DamageClass::Status),
            "physical" => Ok(DamageClass::Physical),
            "special" => Ok(DamageClass::Special),
            _ => Err(CoverageError::UnknownDamageClass(s.to_string())),
        }
    }
}

impl fmt::Display for DamageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game generation a move was introduced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Generation {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::I,
        Generation::II,
        Generation::III,
        Generation::IV,
        Generation::V,
        Generation::VI,
        Generation::VII,
        Generation::VIII,
        Generation::IX,
    ];

    pub fn numeral(&self) -> &'static str {
        match self {
            Generation::I => "i",
            Generation::II => "ii",
            Generation::III => "iii",
            Generation::IV => "iv",
            Generation::V => "v",
            Generation::VI => "vi",
            Generation::VII => "vii",
            Generation::VIII => "viii",
            Generation::IX => "ix",
        }
    }

    /// 1-based generation number
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }
}

impl FromStr for Generation {
    type Err = CoverageError;

    /// Parses API names such as `generation-iv`, a bare numeral or a number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let numeral = lowered.strip_prefix("generation-").unwrap_or(&lowered);

        Generation::ALL
            .into_iter()
            .find(|generation| {
                generation.numeral() == numeral || generation.number().to_string() == numeral
            })
            .ok_or_else(|| CoverageError::UnknownGeneration(s.to_string()))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation {}", self.numeral().to_uppercase())
    }
}

/// Optional move details; absent values stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMeta {
    pub accuracy: Option<u32>,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub effect_chance: Option<u32>,
    pub effect: Option<String>,
    pub short_effect: Option<String>,
    pub crit_rate: Option<i32>,
    pub drain: Option<i32>,
    pub flinch_chance: Option<i32>,
    pub healing: Option<i32>,
    pub min_hits: Option<i32>,
    pub max_hits: Option<i32>,
    pub min_turns: Option<i32>,
    pub max_turns: Option<i32>,
    pub stat_chance: Option<i32>,
}

impl MoveMeta {
    const LANGUAGE: &'static str = "en";

    pub fn from_record(record: &MoveRecord) -> Self {
        let meta = record.meta.clone().unwrap_or_default();
        let effect_chance = record.effect_chance;

        Self {
            accuracy: record.accuracy,
            power: record.power,
            pp: record.pp,
            effect_chance,
            effect: record
                .effect(Self::LANGUAGE)
                .map(|text| expand_effect_chance(text, effect_chance)),
            short_effect: record
                .short_effect(Self::LANGUAGE)
                .map(|text| expand_effect_chance(text, effect_chance)),
            crit_rate: meta.crit_rate,
            drain: meta.drain,
            flinch_chance: meta.flinch_chance,
            healing: meta.healing,
            min_hits: meta.min_hits,
            max_hits: meta.max_hits,
            min_turns: meta.min_turns,
            max_turns: meta.max_turns,
            stat_chance: meta.stat_chance,
        }
    }
}

/// Effect texts carry a `$effect_chance` placeholder.
fn expand_effect_chance(text: &str, chance: Option<u32>) -> String {
    match chance {
        Some(chance) => text.replace("$effect_chance", &chance.to_string()),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct Move {
    id: u32,
    name: String,
    damage_class: DamageClass,
    type_: Rc<Type>,
    generation: Generation,
    pub meta: MoveMeta,
}

impl Move {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        damage_class: DamageClass,
        type_: Rc<Type>,
        generation: Generation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            damage_class,
            type_,
            generation,
            meta: MoveMeta::default(),
        }
    }

    /// Build from a `/move` record and the already resolved move type.
    pub fn from_record(record: &MoveRecord, type_: Rc<Type>) -> Result<Self, CoverageError> {
        let damage_class = record.damage_class.name.parse()?;
        let generation = match &record.generation {
            Some(resource) => resource.name.parse()?,
            None => return Err(CoverageError::UnknownGeneration(String::new())),
        };

        let mut built = Self::new(record.id, record.name.clone(), damage_class, type_, generation);
        built.meta = MoveMeta::from_record(record);
        Ok(built)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_class(&self) -> DamageClass {
        self.damage_class
    }

    pub fn move_type(&self) -> &Rc<Type> {
        &self.type_
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.damage_class == other.damage_class
            && self.type_ == other.type_
    }
}

impl Eq for Move {}

impl HasTypeCoverage for Move {
    fn type_coverage(&self) -> TypeCoverage {
        self.type_.type_coverage()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Up to four moves; the first slot is always filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    pub first: Rc<Move>,
    pub second: Option<Rc<Move>>,
    pub third: Option<Rc<Move>>,
    pub fourth: Option<Rc<Move>>,
}

impl MoveSet {
    pub fn new(first: Rc<Move>) -> Self {
        Self {
            first,
            second: None,
            third: None,
            fourth: None,
        }
    }

    pub fn with_moves(
        first: Rc<Move>,
        second: Option<Rc<Move>>,
        third: Option<Rc<Move>>,
        fourth: Option<Rc<Move>>,
    ) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
    }

    /// Filled slots in order
    pub fn moves(&self) -> Vec<&Rc<Move>> {
        std::iter::once(&self.first)
            .chain(self.second.as_ref())
            .chain(self.third.as_ref())
            .chain(self.fourth.as_ref())
            .collect()
    }

    pub fn damage_classes(&self, unique: bool) -> Vec<DamageClass> {
        let mut classes = Vec::new();
        for move_ in self.moves() {
            if !unique || !classes.contains(&move_.damage_class()) {
                classes.push(move_.damage_class());
            }
        }
        classes
    }

    pub fn damage_types(&self, unique: bool) -> Vec<TypeRef> {
        let mut types = Vec::new();
        for move_ in self.moves() {
            let type_ref = move_.move_type().type_ref();
            if !unique || !types.contains(type_ref) {
                types.push(type_ref.clone());
            }
        }
        types
    }
}

impl HasTypeCoverage for MoveSet {
    /// Offensive relations of every move, each opposing type kept only under
    /// the strongest relation any move reaches.
    fn type_coverage(&self) -> TypeCoverage {
        let mut coverage = TypeCoverage::new();
        for move_ in self.moves() {
            coverage.extend(&move_.type_coverage().offensive());
        }
        coverage.resolve_offense()
    }
}
