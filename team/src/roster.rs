//! The collection of tracked Pokemon and teams

use std::collections::BTreeMap;

use crate::RosterError;
use crate::pokemon::Pokemon;
use crate::team::{Team, TeamLineup, TeamPosition};

/// Every tracked Pokemon and team, plus an optional active team.
///
/// The active team, when set, always names a team in the roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pokemon: BTreeMap<u32, Pokemon>,
    teams: BTreeMap<u32, Team>,
    active_team: Option<u32>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked Pokemon ordered by id
    pub fn pokemon(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.values()
    }

    /// Teams ordered by id
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn contains_pokemon(&self, id: u32) -> bool {
        self.pokemon.contains_key(&id)
    }

    pub fn contains_team(&self, id: u32) -> bool {
        self.teams.contains_key(&id)
    }

    pub fn get_pokemon(&self, id: u32) -> Result<&Pokemon, RosterError> {
        self.pokemon.get(&id).ok_or(RosterError::UnknownPokemon(id))
    }

    pub fn get_pokemon_mut(&mut self, id: u32) -> Result<&mut Pokemon, RosterError> {
        self.pokemon
            .get_mut(&id)
            .ok_or(RosterError::UnknownPokemon(id))
    }

    /// Insert or replace by id
    pub fn add_pokemon(&mut self, pokemon: Pokemon) {
        self.pokemon.insert(pokemon.id, pokemon);
    }

    /// Remove a Pokemon and empty every team position that held it.
    pub fn remove_pokemon(&mut self, id: u32) -> Result<Pokemon, RosterError> {
        let removed = self
            .pokemon
            .remove(&id)
            .ok_or(RosterError::UnknownPokemon(id))?;

        for team in self.teams.values_mut() {
            let cleared = team.clear_pokemon(id);
            if cleared > 0 {
                tracing::debug!(pokemon = id, team = team.id, cleared, "cleared team positions");
            }
        }

        Ok(removed)
    }

    pub fn get_team(&self, id: u32) -> Result<&Team, RosterError> {
        self.teams.get(&id).ok_or(RosterError::UnknownTeam(id))
    }

    pub fn get_team_mut(&mut self, id: u32) -> Result<&mut Team, RosterError> {
        self.teams.get_mut(&id).ok_or(RosterError::UnknownTeam(id))
    }

    /// Insert or replace by id, optionally making it the active team.
    pub fn add_team(&mut self, team: Team, active: bool) {
        let id = team.id;
        self.teams.insert(id, team);
        if active {
            self.active_team = Some(id);
        }
    }

    /// Remove a team, clearing the active team if it was this one.
    pub fn remove_team(&mut self, id: u32) -> Result<Team, RosterError> {
        let removed = self.teams.remove(&id).ok_or(RosterError::UnknownTeam(id))?;
        if self.active_team == Some(id) {
            self.active_team = None;
        }
        Ok(removed)
    }

    pub fn active_team_id(&self) -> Option<u32> {
        self.active_team
    }

    pub fn active_team(&self) -> Option<&Team> {
        self.active_team.and_then(|id| self.teams.get(&id))
    }

    /// `None` clears the active team; an unknown id is rejected.
    pub fn set_active_team(&mut self, id: Option<u32>) -> Result<(), RosterError> {
        if let Some(id) = id {
            if !self.teams.contains_key(&id) {
                return Err(RosterError::UnknownTeam(id));
            }
        }
        self.active_team = id;
        Ok(())
    }

    /// Put a tracked Pokemon (or nothing) at a team position.
    pub fn assign(
        &mut self,
        team: u32,
        position: TeamPosition,
        pokemon: Option<u32>,
    ) -> Result<(), RosterError> {
        if let Some(id) = pokemon {
            if !self.pokemon.contains_key(&id) {
                return Err(RosterError::UnknownPokemon(id));
            }
        }

        self.get_team_mut(team)?.set(position, pokemon);
        Ok(())
    }

    /// Resolve a team's positions to the Pokemon they hold.
    pub fn lineup(&self, team: u32) -> Result<TeamLineup<'_>, RosterError> {
        let team = self.get_team(team)?;
        let members = team
            .members()
            .into_iter()
            .map(|(position, id)| match self.pokemon.get(&id) {
                Some(pokemon) => Ok((position, pokemon)),
                None => Err(RosterError::DanglingReference {
                    team: team.name.clone(),
                    position,
                    pokemon: id,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TeamLineup { team, members })
    }
}
