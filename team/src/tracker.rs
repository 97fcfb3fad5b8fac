//! Id minting and effort value bookkeeping on top of a roster

use std::rc::Rc;

use trainer_coverage::{Species, StatSet};

use crate::RosterError;
use crate::pokemon::Pokemon;
use crate::roster::Roster;
use crate::team::Team;

#[derive(Debug, Clone)]
pub struct Tracker {
    roster: Roster,
    next_pokemon: u32,
    next_team: u32,
}

impl Tracker {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            next_pokemon: 1,
            next_team: 1,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Smallest unused Pokemon id at or above the internal counter.
    pub fn unique_id(&mut self) -> u32 {
        while self.roster.contains_pokemon(self.next_pokemon) {
            self.next_pokemon += 1;
        }
        self.next_pokemon
    }

    /// Smallest unused team id at or above the internal counter.
    pub fn unique_team_id(&mut self) -> u32 {
        while self.roster.contains_team(self.next_team) {
            self.next_team += 1;
        }
        self.next_team
    }

    /// Start tracking a new Pokemon of this species under a fresh id.
    pub fn track(&mut self, species: Rc<Species>, nickname: Option<&str>) -> u32 {
        let id = self.unique_id();
        let mut pokemon = Pokemon::new(id, species);
        pokemon.set_nickname(nickname);

        tracing::info!(pokemon = id, species = pokemon.species().name(), "tracking");
        self.roster.add_pokemon(pokemon);
        id
    }

    /// Track an already built Pokemon under its own id.
    pub fn track_existing(&mut self, pokemon: Pokemon) -> Result<u32, RosterError> {
        if self.roster.contains_pokemon(pokemon.id) {
            return Err(RosterError::DuplicatePokemon(pokemon.id));
        }
        let id = pokemon.id;
        self.roster.add_pokemon(pokemon);
        Ok(id)
    }

    /// Stop tracking a Pokemon; it is removed from every team.
    pub fn untrack(&mut self, id: u32) -> Result<Pokemon, RosterError> {
        let removed = self.roster.remove_pokemon(id)?;
        tracing::info!(pokemon = id, "untracked");
        Ok(removed)
    }

    /// Create an empty team under a fresh id.
    pub fn create_team(&mut self, name: &str, active: bool) -> u32 {
        let id = self.unique_team_id();
        self.roster.add_team(Team::new(id, name.trim()), active);
        id
    }

    /// Record `count` battles against `defeated` for a tracked Pokemon.
    pub fn battle(
        &mut self,
        id: u32,
        defeated: &Species,
        count: u32,
    ) -> Result<StatSet, RosterError> {
        Ok(self.roster.get_pokemon_mut(id)?.battle(defeated, count))
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}
