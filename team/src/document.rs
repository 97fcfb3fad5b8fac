//! Serialized form of a roster
//!
//! The document stores species and moves by id only; rebuilding a roster
//! resolves them through a [`Pokedex`].

use serde::{Deserialize, Serialize};
use trainer_coverage::{MoveSet, Pokedex, StatSet};
use trainer_records::{DataSource, IdOrName};

use crate::RosterError;
use crate::pokemon::{HeldItem, Pokemon};
use crate::roster::Roster;
use crate::team::{Team, TeamPosition};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub pokemon: Vec<PokemonEntry>,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
    #[serde(default)]
    pub active_team: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub id: u32,
    pub species: u32,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub pokerus: bool,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub evs: StatSet,
    #[serde(default)]
    pub stats: StatSet,
    #[serde(default)]
    pub move_set: Option<MoveSetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSetEntry {
    pub first: u32,
    #[serde(default)]
    pub second: Option<u32>,
    #[serde(default)]
    pub third: Option<u32>,
    #[serde(default)]
    pub fourth: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub team: TeamSlots,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSlots {
    #[serde(default)]
    pub first: Option<u32>,
    #[serde(default)]
    pub second: Option<u32>,
    #[serde(default)]
    pub third: Option<u32>,
    #[serde(default)]
    pub fourth: Option<u32>,
    #[serde(default)]
    pub fifth: Option<u32>,
    #[serde(default)]
    pub sixth: Option<u32>,
}

impl TeamSlots {
    fn get(&self, position: TeamPosition) -> Option<u32> {
        match position {
            TeamPosition::First => self.first,
            TeamPosition::Second => self.second,
            TeamPosition::Third => self.third,
            TeamPosition::Fourth => self.fourth,
            TeamPosition::Fifth => self.fifth,
            TeamPosition::Sixth => self.sixth,
        }
    }

    fn set(&mut self, position: TeamPosition, pokemon: Option<u32>) {
        match position {
            TeamPosition::First => self.first = pokemon,
            TeamPosition::Second => self.second = pokemon,
            TeamPosition::Third => self.third = pokemon,
            TeamPosition::Fourth => self.fourth = pokemon,
            TeamPosition::Fifth => self.fifth = pokemon,
            TeamPosition::Sixth => self.sixth = pokemon,
        }
    }
}

impl RosterDocument {
    pub fn from_yaml(text: &str) -> Result<Self, RosterError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml(&self) -> Result<String, RosterError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Roster {
    pub fn to_document(&self) -> RosterDocument {
        RosterDocument {
            pokemon: self.pokemon().map(pokemon_entry).collect(),
            teams: self.teams().map(team_entry).collect(),
            active_team: self.active_team_id(),
        }
    }

    /// Rebuild a roster, resolving species and moves through `dex`.
    ///
    /// A team position naming an untracked Pokemon fails the whole load.
    pub fn from_document<S: DataSource>(
        document: &RosterDocument,
        dex: &mut Pokedex<S>,
    ) -> Result<Roster, RosterError> {
        let mut roster = Roster::new();

        for entry in &document.pokemon {
            if roster.contains_pokemon(entry.id) {
                return Err(RosterError::DuplicatePokemon(entry.id));
            }
            roster.add_pokemon(build_pokemon(entry, dex)?);
        }

        for entry in &document.teams {
            if roster.contains_team(entry.id) {
                return Err(RosterError::DuplicateTeam(entry.id));
            }
            let mut team = Team::new(entry.id, entry.name.clone());
            for position in TeamPosition::ALL {
                let Some(pokemon) = entry.team.get(position) else {
                    continue;
                };
                if !roster.contains_pokemon(pokemon) {
                    return Err(RosterError::DanglingReference {
                        team: entry.name.clone(),
                        position,
                        pokemon,
                    });
                }
                team.set(position, Some(pokemon));
            }
            roster.add_team(team, false);
        }

        roster.set_active_team(document.active_team)?;
        Ok(roster)
    }
}

fn pokemon_entry(pokemon: &Pokemon) -> PokemonEntry {
    PokemonEntry {
        id: pokemon.id,
        species: pokemon.species().id(),
        nick_name: pokemon.nickname().map(str::to_string),
        pokerus: pokemon.pokerus,
        item: pokemon.item.map(|item| item.name().to_string()),
        evs: pokemon.evs,
        stats: pokemon.stats,
        move_set: pokemon.move_set.as_ref().map(|set| MoveSetEntry {
            first: set.first.id(),
            second: set.second.as_ref().map(|m| m.id()),
            third: set.third.as_ref().map(|m| m.id()),
            fourth: set.fourth.as_ref().map(|m| m.id()),
        }),
    }
}

fn team_entry(team: &Team) -> TeamEntry {
    let mut slots = TeamSlots::default();
    for (position, pokemon) in team.slots() {
        slots.set(position, pokemon);
    }

    TeamEntry {
        id: team.id,
        name: team.name.clone(),
        team: slots,
    }
}

fn build_pokemon<S: DataSource>(
    entry: &PokemonEntry,
    dex: &mut Pokedex<S>,
) -> Result<Pokemon, RosterError> {
    if !entry.evs.within_caps() {
        return Err(RosterError::EffortValuesOverCap {
            pokemon: entry.id,
            evs: entry.evs,
        });
    }

    let species = dex
        .species(&IdOrName::Id(entry.species))
        .map_err(|source| RosterError::Lookup {
            resource: format!("species {}", entry.species),
            source,
        })?;

    let mut pokemon = Pokemon::new(entry.id, species);
    pokemon.set_nickname(entry.nick_name.as_deref());
    pokemon.pokerus = entry.pokerus;
    pokemon.item = entry
        .item
        .as_deref()
        .map(str::parse::<HeldItem>)
        .transpose()?;
    pokemon.evs = entry.evs;
    pokemon.stats = entry.stats;

    if let Some(set) = &entry.move_set {
        let mut lookup = |id: u32| {
            dex.move_(&IdOrName::Id(id))
                .map_err(|source| RosterError::Lookup {
                    resource: format!("move {id}"),
                    source,
                })
        };

        let first = lookup(set.first)?;
        let second = set.second.map(&mut lookup).transpose()?;
        let third = set.third.map(&mut lookup).transpose()?;
        let fourth = set.fourth.map(&mut lookup).transpose()?;
        pokemon.move_set = Some(MoveSet::with_moves(first, second, third, fourth));
    }

    Ok(pokemon)
}
