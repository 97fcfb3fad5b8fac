//! Tracked individual Pokemon and the items they hold

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use trainer_coverage::{HasTypeCoverage, MoveSet, Species, Stat, StatSet, TypeCoverage};

use crate::RosterError;

/// Items that change effort value gains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeldItem {
    MachoBrace,
    PowerWeight,
    PowerBracer,
    PowerBelt,
    PowerLens,
    PowerBand,
    PowerAnklet,
}

impl HeldItem {
    pub const ALL: [HeldItem; 7] = [
        HeldItem::MachoBrace,
        HeldItem::PowerWeight,
        HeldItem::PowerBracer,
        HeldItem::PowerBelt,
        HeldItem::PowerLens,
        HeldItem::PowerBand,
        HeldItem::PowerAnklet,
    ];

    /// Bonus each Power item adds to its stat
    pub const POWER_BONUS: u32 = 4;

    pub fn name(&self) -> &'static str {
        match self {
            HeldItem::MachoBrace => "Macho Brace",
            HeldItem::PowerWeight => "Power Weight",
            HeldItem::PowerBracer => "Power Bracer",
            HeldItem::PowerBelt => "Power Belt",
            HeldItem::PowerLens => "Power Lens",
            HeldItem::PowerBand => "Power Band",
            HeldItem::PowerAnklet => "Power Anklet",
        }
    }

    /// Stat boosted by a Power item
    pub fn boosted_stat(&self) -> Option<Stat> {
        match self {
            HeldItem::MachoBrace => None,
            HeldItem::PowerWeight => Some(Stat::Hp),
            HeldItem::PowerBracer => Some(Stat::Attack),
            HeldItem::PowerBelt => Some(Stat::Defense),
            HeldItem::PowerLens => Some(Stat::SpecialAttack),
            HeldItem::PowerBand => Some(Stat::SpecialDefense),
            HeldItem::PowerAnklet => Some(Stat::Speed),
        }
    }

    /// Adjust one battle's effort value yield
    pub fn apply(&self, evs: StatSet) -> StatSet {
        match self.boosted_stat() {
            Some(stat) => evs + StatSet::single(stat, Self::POWER_BONUS),
            None => evs * 2,
        }
    }
}

impl FromStr for HeldItem {
    type Err = RosterError;

    /// Case-insensitive; spaces, hyphens and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        HeldItem::ALL
            .into_iter()
            .find(|item| normalize(item.name()) == wanted)
            .ok_or_else(|| RosterError::InvalidItem(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for HeldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub id: u32,
    species: Rc<Species>,
    nickname: Option<String>,
    pub pokerus: bool,
    pub item: Option<HeldItem>,
    pub evs: StatSet,
    pub stats: StatSet,
    pub move_set: Option<MoveSet>,
}

impl Pokemon {
    pub fn new(id: u32, species: Rc<Species>) -> Self {
        Self {
            id,
            species,
            nickname: None,
            pokerus: false,
            item: None,
            evs: StatSet::default(),
            stats: StatSet::default(),
            move_set: None,
        }
    }

    pub fn species(&self) -> &Rc<Species> {
        &self.species
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Trimmed; blank input removes the nickname.
    pub fn set_nickname(&mut self, nickname: Option<&str>) {
        self.nickname = nickname
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
    }

    /// Nickname, or the species name without one
    pub fn name(&self) -> &str {
        self.nickname().unwrap_or_else(|| self.species.name())
    }

    /// Record `count` battles against `defeated`. Returns the effort values
    /// actually gained after capping.
    pub fn battle(&mut self, defeated: &Species, count: u32) -> StatSet {
        let mut gain = defeated.evs();
        if let Some(item) = self.item {
            gain = item.apply(gain);
        }
        if self.pokerus {
            gain *= 2;
        }

        let applied = self.evs.add_capped(gain.capped() * count);
        tracing::debug!(
            pokemon = self.id,
            defeated = defeated.name(),
            count,
            gained = applied.total(),
            "battle recorded"
        );
        applied
    }
}

impl HasTypeCoverage for Pokemon {
    fn type_coverage(&self) -> TypeCoverage {
        let mut coverage = self.species.type_coverage();
        if let Some(move_set) = &self.move_set {
            coverage += move_set;
        }
        coverage
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.species.name())
    }
}
