//! Six-field stat vectors used for base yields and effort values

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;

use crate::CoverageError;

/// The six permanent stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Name used by the API, e.g. `special-attack`
    pub fn api_name(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Special Attack",
            Stat::SpecialDefense => "Special Defense",
            Stat::Speed => "Speed",
        }
    }
}

impl FromStr for Stat {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "hp" => Ok(Stat::Hp),
            "attack" | "atk" => Ok(Stat::Attack),
            "defense" | "def" => Ok(Stat::Defense),
            "special-attack" | "spa" => Ok(Stat::SpecialAttack),
            "special-defense" | "spd" => Ok(Stat::SpecialDefense),
            "speed" | "spe" => Ok(Stat::Speed),
            _ => Err(CoverageError::UnknownStat(s.to_string())),
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per stat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatSet {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatSet {
    /// Highest effort value a single stat can reach
    pub const MAX_STAT: u32 = 255;
    /// Highest effort value total across all stats
    pub const MAX_TOTAL: u32 = 510;

    pub fn new() -> Self {
        Self::default()
    }

    /// A set with one stat filled in
    pub fn single(stat: Stat, value: u32) -> Self {
        let mut set = Self::default();
        set.set(stat, value);
        set
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Sum of all stats, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        Stat::ALL
            .iter()
            .fold(0u32, |sum, stat| sum.saturating_add(self.get(*stat)))
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Add `gain` stat by stat, in [`Stat::ALL`] order, stopping each stat at
    /// [`StatSet::MAX_STAT`] and the whole set at [`StatSet::MAX_TOTAL`].
    /// Returns what was actually added.
    pub fn add_capped(&mut self, gain: StatSet) -> StatSet {
        let mut applied = StatSet::default();
        for stat in Stat::ALL {
            let room_in_stat = Self::MAX_STAT.saturating_sub(self.get(stat));
            let room_in_total = Self::MAX_TOTAL.saturating_sub(self.total());
            let added = gain.get(stat).min(room_in_stat).min(room_in_total);

            self.set(stat, self.get(stat).saturating_add(added));
            applied.set(stat, added);
        }
        applied
    }

    /// Copy with every stat lowered to at most [`StatSet::MAX_STAT`]
    pub fn capped(&self) -> StatSet {
        let mut capped = *self;
        for stat in Stat::ALL {
            capped.set(stat, self.get(stat).min(Self::MAX_STAT));
        }
        capped
    }

    /// True when no stat exceeds [`StatSet::MAX_STAT`] and the total stays
    /// within [`StatSet::MAX_TOTAL`].
    pub fn within_caps(&self) -> bool {
        Stat::ALL
            .iter()
            .all(|stat| self.get(*stat) <= Self::MAX_STAT)
            && self.total() <= Self::MAX_TOTAL
    }

    /// Stats with a non-zero value, in [`Stat::ALL`] order
    pub fn non_zero(&self) -> Vec<(Stat, u32)> {
        Stat::ALL
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value > 0)
            .collect()
    }
}

impl AddAssign for StatSet {
    fn add_assign(&mut self, rhs: Self) {
        for stat in Stat::ALL {
            self.set(stat, self.get(stat).saturating_add(rhs.get(stat)));
        }
    }
}

impl Add for StatSet {
    type Output = StatSet;

    fn add(mut self, rhs: Self) -> StatSet {
        self += rhs;
        self
    }
}

impl MulAssign<u32> for StatSet {
    fn mul_assign(&mut self, rhs: u32) {
        for stat in Stat::ALL {
            self.set(stat, self.get(stat).saturating_mul(rhs));
        }
    }
}

impl Mul<u32> for StatSet {
    type Output = StatSet;

    fn mul(mut self, rhs: u32) -> StatSet {
        self *= rhs;
        self
    }
}

impl fmt::Display for StatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Stat::ALL
            .iter()
            .map(|stat| format!("{}: {}", stat.label(), self.get(*stat)))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let stats = StatSet::new();
        assert!(stats.is_zero());
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut stats = StatSet::new();
        stats.set(Stat::SpecialAttack, 12);

        assert_eq!(stats.special_attack, 12);
        assert_eq!(stats.get(Stat::SpecialAttack), 12);
        assert_eq!(stats.non_zero(), vec![(Stat::SpecialAttack, 12)]);
    }

    #[test]
    fn test_add_and_multiply() {
        let yield_ = StatSet {
            attack: 2,
            speed: 1,
            ..StatSet::default()
        };

        let total = yield_ + StatSet::single(Stat::Attack, 4);
        assert_eq!(total.attack, 6);

        let tripled = total * 3;
        assert_eq!(tripled.attack, 18);
        assert_eq!(tripled.speed, 3);
        assert_eq!(tripled.total(), 21);
    }

    #[test]
    fn test_add_capped_per_stat() {
        let mut evs = StatSet::single(Stat::Speed, 250);
        let applied = evs.add_capped(StatSet::single(Stat::Speed, 10));

        assert_eq!(evs.speed, 255);
        assert_eq!(applied.speed, 5);
    }

    #[test]
    fn test_add_capped_total() {
        let mut evs = StatSet {
            hp: 255,
            attack: 250,
            ..StatSet::default()
        };
        let applied = evs.add_capped(StatSet {
            attack: 4,
            defense: 10,
            ..StatSet::default()
        });

        assert_eq!(evs.attack, 254);
        assert_eq!(evs.defense, 1);
        assert_eq!(evs.total(), StatSet::MAX_TOTAL);
        assert_eq!(applied.total(), 5);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = StatSet {
            hp: u32::MAX,
            attack: 1,
            ..StatSet::default()
        };
        assert_eq!(huge.total(), u32::MAX);
        assert!(!huge.within_caps());

        let scaled = StatSet::single(Stat::Speed, 3) * 2_000_000_000;
        assert_eq!(scaled.speed, u32::MAX);

        let summed = huge + StatSet::single(Stat::Hp, 10);
        assert_eq!(summed.hp, u32::MAX);
    }

    #[test]
    fn test_add_capped_huge_gain() {
        let mut evs = StatSet::single(Stat::Attack, 10);
        let applied = evs.add_capped(StatSet::single(Stat::Attack, u32::MAX));

        assert_eq!(evs.attack, StatSet::MAX_STAT);
        assert_eq!(applied.attack, 245);
    }

    #[test]
    fn test_capped_and_within_caps() {
        let over = StatSet {
            hp: 300,
            speed: 4,
            ..StatSet::default()
        };
        assert!(!over.within_caps());

        let capped = over.capped();
        assert_eq!(capped.hp, StatSet::MAX_STAT);
        assert_eq!(capped.speed, 4);
        assert!(capped.within_caps());

        let spread = StatSet {
            hp: 255,
            attack: 255,
            defense: 1,
            ..StatSet::default()
        };
        assert!(!spread.within_caps());
    }

    #[test]
    fn test_stat_from_str() {
        assert_eq!("special-attack".parse::<Stat>().unwrap(), Stat::SpecialAttack);
        assert_eq!("special_defense".parse::<Stat>().unwrap(), Stat::SpecialDefense);
        assert_eq!("SPE".parse::<Stat>().unwrap(), Stat::Speed);
        assert!("luck".parse::<Stat>().is_err());
    }
}
