//! Teams of up to six Pokemon

use std::fmt;
use std::str::FromStr;

use trainer_coverage::{HasTypeCoverage, TypeCoverage};

use crate::RosterError;
use crate::pokemon::Pokemon;

/// One of the six team positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamPosition {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl TeamPosition {
    pub const ALL: [TeamPosition; 6] = [
        TeamPosition::First,
        TeamPosition::Second,
        TeamPosition::Third,
        TeamPosition::Fourth,
        TeamPosition::Fifth,
        TeamPosition::Sixth,
    ];

    /// 1-based position number
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn key(&self) -> &'static str {
        match self {
            TeamPosition::First => "first",
            TeamPosition::Second => "second",
            TeamPosition::Third => "third",
            TeamPosition::Fourth => "fourth",
            TeamPosition::Fifth => "fifth",
            TeamPosition::Sixth => "sixth",
        }
    }

    pub fn from_number(number: i64) -> Result<Self, RosterError> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| TeamPosition::ALL.get(index).copied())
            .ok_or_else(|| RosterError::InvalidPosition(number.to_string()))
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<i64> for TeamPosition {
    type Error = RosterError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        TeamPosition::from_number(value)
    }
}

impl FromStr for TeamPosition {
    type Err = RosterError;

    /// Accepts `third`, `Third` or `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<i64>() {
            return TeamPosition::from_number(number);
        }

        let lowered = trimmed.to_lowercase();
        TeamPosition::ALL
            .into_iter()
            .find(|position| position.key() == lowered)
            .ok_or_else(|| RosterError::InvalidPosition(s.to_string()))
    }
}

impl fmt::Display for TeamPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// A named team. Positions hold Pokemon ids; the roster owns the Pokemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    slots: [Option<u32>; 6],
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slots: [None; 6],
        }
    }

    pub fn get(&self, position: TeamPosition) -> Option<u32> {
        self.slots[position.index()]
    }

    pub fn set(&mut self, position: TeamPosition, pokemon: Option<u32>) {
        self.slots[position.index()] = pokemon;
    }

    /// Read a position by its 1-based number
    pub fn get_position(&self, number: i64) -> Result<Option<u32>, RosterError> {
        Ok(self.get(TeamPosition::from_number(number)?))
    }

    /// Write a position by its 1-based number
    pub fn set_position(&mut self, number: i64, pokemon: Option<u32>) -> Result<(), RosterError> {
        self.set(TeamPosition::from_number(number)?, pokemon);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Every position with its occupant, in order
    pub fn slots(&self) -> impl Iterator<Item = (TeamPosition, Option<u32>)> + '_ {
        TeamPosition::ALL
            .into_iter()
            .map(move |position| (position, self.get(position)))
    }

    /// Occupied positions in order
    pub fn members(&self) -> Vec<(TeamPosition, u32)> {
        self.slots()
            .filter_map(|(position, id)| id.map(|id| (position, id)))
            .collect()
    }

    /// First position holding this Pokemon
    pub fn position_of(&self, pokemon: u32) -> Option<TeamPosition> {
        self.slots()
            .find(|(_, id)| *id == Some(pokemon))
            .map(|(position, _)| position)
    }

    /// Empty every position holding this Pokemon. Returns how many were
    /// cleared.
    pub fn clear_pokemon(&mut self, pokemon: u32) -> usize {
        let mut cleared = 0;
        for slot in self.slots.iter_mut().filter(|slot| **slot == Some(pokemon)) {
            *slot = None;
            cleared += 1;
        }
        cleared
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A team with its members resolved against a roster.
#[derive(Debug, Clone)]
pub struct TeamLineup<'a> {
    pub team: &'a Team,
    pub members: Vec<(TeamPosition, &'a Pokemon)>,
}

impl HasTypeCoverage for TeamLineup<'_> {
    /// Union of the members' coverage with the offensive collapse applied.
    /// An empty team has an empty coverage.
    fn type_coverage(&self) -> TypeCoverage {
        let mut coverage = TypeCoverage::new();
        for (_, pokemon) in &self.members {
            coverage += *pokemon;
        }
        coverage.resolve_offense()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_number() {
        assert_eq!(TeamPosition::from_number(1).unwrap(), TeamPosition::First);
        assert_eq!(TeamPosition::try_from(6i64).unwrap(), TeamPosition::Sixth);
        assert!(matches!(
            TeamPosition::from_number(0),
            Err(RosterError::InvalidPosition(_))
        ));
        assert!(TeamPosition::from_number(7).is_err());
        assert!(TeamPosition::from_number(-1).is_err());
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!("third".parse::<TeamPosition>().unwrap(), TeamPosition::Third);
        assert_eq!("Fifth".parse::<TeamPosition>().unwrap(), TeamPosition::Fifth);
        assert_eq!("2".parse::<TeamPosition>().unwrap(), TeamPosition::Second);
        assert!("seventh".parse::<TeamPosition>().is_err());
    }

    #[test]
    fn test_set_and_get_positions() {
        let mut team = Team::new(1, "rain");
        team.set(TeamPosition::Third, Some(7));
        team.set_position(1, Some(3)).unwrap();

        assert_eq!(team.get_position(3).unwrap(), Some(7));
        assert_eq!(team.get(TeamPosition::First), Some(3));
        assert_eq!(team.get(TeamPosition::Second), None);
        assert!(team.set_position(9, Some(1)).is_err());
        assert_eq!(
            team.members(),
            vec![(TeamPosition::First, 3), (TeamPosition::Third, 7)]
        );
    }

    #[test]
    fn test_is_full() {
        let mut team = Team::new(1, "full");
        assert!(team.is_empty());

        for (id, position) in TeamPosition::ALL.into_iter().enumerate() {
            assert!(!team.is_full());
            team.set(position, Some(id as u32 + 1));
        }
        assert!(team.is_full());
    }

    #[test]
    fn test_clear_pokemon_clears_every_position() {
        let mut team = Team::new(1, "twins");
        team.set(TeamPosition::Second, Some(4));
        team.set(TeamPosition::Fifth, Some(4));
        team.set(TeamPosition::Sixth, Some(5));

        assert_eq!(team.position_of(4), Some(TeamPosition::Second));
        assert_eq!(team.clear_pokemon(4), 2);
        assert_eq!(team.position_of(4), None);
        assert_eq!(team.get(TeamPosition::Sixth), Some(5));
    }

    #[test]
    fn test_empty_lineup_has_empty_coverage() {
        let team = Team::new(1, "empty");
        let lineup = TeamLineup {
            team: &team,
            members: Vec::new(),
        };

        assert!(lineup.type_coverage().is_empty());
    }
}
