//! Damage relations and their exact multipliers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::CoverageError;

/// Which side of an exchange a relation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationFamily {
    /// Damage this type deals ("to")
    Offensive,
    /// Damage this type takes ("from")
    Defensive,
}

/// Exact damage multiplier, kept as a fraction so comparisons never round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplier {
    numerator: u8,
    denominator: u8,
}

impl Multiplier {
    pub const ZERO: Multiplier = Multiplier::new(0, 1);
    pub const QUARTER: Multiplier = Multiplier::new(1, 4);
    pub const HALF: Multiplier = Multiplier::new(1, 2);
    pub const ONE: Multiplier = Multiplier::new(1, 1);
    pub const DOUBLE: Multiplier = Multiplier::new(2, 1);
    pub const QUADRUPLE: Multiplier = Multiplier::new(4, 1);

    const fn new(numerator: u8, denominator: u8) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> u8 {
        self.numerator
    }

    pub fn denominator(&self) -> u8 {
        self.denominator
    }

    pub fn as_f32(&self) -> f32 {
        f32::from(self.numerator) / f32::from(self.denominator)
    }
}

impl Ord for Multiplier {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u16::from(self.numerator) * u16::from(other.denominator);
        let rhs = u16::from(other.numerator) * u16::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Multiplier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}x", self.numerator)
        } else {
            write!(f, "{}/{}x", self.numerator, self.denominator)
        }
    }
}

/// How much damage one type deals to, or takes from, another.
///
/// Twelve relations in two families of six. Quarter and quadruple only
/// arise from combining two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageRelation {
    NoDamageTo,
    QuarterDamageTo,
    HalfDamageTo,
    NormalDamageTo,
    DoubleDamageTo,
    QuadrupleDamageTo,
    NoDamageFrom,
    QuarterDamageFrom,
    HalfDamageFrom,
    NormalDamageFrom,
    DoubleDamageFrom,
    QuadrupleDamageFrom,
}

impl DamageRelation {
    /// Offensive relations, weakest first
    pub const TO: [DamageRelation; 6] = [
        DamageRelation::NoDamageTo,
        DamageRelation::QuarterDamageTo,
        DamageRelation::HalfDamageTo,
        DamageRelation::NormalDamageTo,
        DamageRelation::DoubleDamageTo,
        DamageRelation::QuadrupleDamageTo,
    ];

    /// Defensive relations, weakest first
    pub const FROM: [DamageRelation; 6] = [
        DamageRelation::NoDamageFrom,
        DamageRelation::QuarterDamageFrom,
        DamageRelation::HalfDamageFrom,
        DamageRelation::NormalDamageFrom,
        DamageRelation::DoubleDamageFrom,
        DamageRelation::QuadrupleDamageFrom,
    ];

    /// All twelve relations, offensive family first
    pub const ALL: [DamageRelation; 12] = [
        DamageRelation::NoDamageTo,
        DamageRelation::QuarterDamageTo,
        DamageRelation::HalfDamageTo,
        DamageRelation::NormalDamageTo,
        DamageRelation::DoubleDamageTo,
        DamageRelation::QuadrupleDamageTo,
        DamageRelation::NoDamageFrom,
        DamageRelation::QuarterDamageFrom,
        DamageRelation::HalfDamageFrom,
        DamageRelation::NormalDamageFrom,
        DamageRelation::DoubleDamageFrom,
        DamageRelation::QuadrupleDamageFrom,
    ];

    /// Position in [`DamageRelation::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Position within the family, 0 (no damage) through 5 (quadruple)
    fn strength(self) -> usize {
        self.index() % 6
    }

    pub fn family(self) -> RelationFamily {
        if self.index() < 6 {
            RelationFamily::Offensive
        } else {
            RelationFamily::Defensive
        }
    }

    pub fn is_offensive(self) -> bool {
        self.family() == RelationFamily::Offensive
    }

    pub fn multiplier(self) -> Multiplier {
        match self.strength() {
            0 => Multiplier::ZERO,
            1 => Multiplier::QUARTER,
            2 => Multiplier::HALF,
            3 => Multiplier::ONE,
            4 => Multiplier::DOUBLE,
            _ => Multiplier::QUADRUPLE,
        }
    }

    /// Compact multiplier label, e.g. `2x` or `1/4x`
    pub fn multiplier_label(self) -> String {
        self.multiplier().to_string()
    }

    /// Human label, e.g. `Double Damage To`
    pub fn label(self) -> &'static str {
        match self {
            DamageRelation::NoDamageTo => "No Damage To",
            DamageRelation::QuarterDamageTo => "Quarter Damage To",
            DamageRelation::HalfDamageTo => "Half Damage To",
            DamageRelation::NormalDamageTo => "Normal Damage To",
            DamageRelation::DoubleDamageTo => "Double Damage To",
            DamageRelation::QuadrupleDamageTo => "Quadruple Damage To",
            DamageRelation::NoDamageFrom => "No Damage From",
            DamageRelation::QuarterDamageFrom => "Quarter Damage From",
            DamageRelation::HalfDamageFrom => "Half Damage From",
            DamageRelation::NormalDamageFrom => "Normal Damage From",
            DamageRelation::DoubleDamageFrom => "Double Damage From",
            DamageRelation::QuadrupleDamageFrom => "Quadruple Damage From",
        }
    }

    /// Snake-case key as used by the API, e.g. `double_damage_from`
    pub fn api_key(self) -> &'static str {
        match self {
            DamageRelation::NoDamageTo => "no_damage_to",
            DamageRelation::QuarterDamageTo => "quarter_damage_to",
            DamageRelation::HalfDamageTo => "half_damage_to",
            DamageRelation::NormalDamageTo => "normal_damage_to",
            DamageRelation::DoubleDamageTo => "double_damage_to",
            DamageRelation::QuadrupleDamageTo => "quadruple_damage_to",
            DamageRelation::NoDamageFrom => "no_damage_from",
            DamageRelation::QuarterDamageFrom => "quarter_damage_from",
            DamageRelation::HalfDamageFrom => "half_damage_from",
            DamageRelation::NormalDamageFrom => "normal_damage_from",
            DamageRelation::DoubleDamageFrom => "double_damage_from",
            DamageRelation::QuadrupleDamageFrom => "quadruple_damage_from",
        }
    }

    /// Stable numeric code. Note the quadruple pair is swapped relative to
    /// the other magnitudes.
    pub fn code(self) -> u8 {
        match self {
            DamageRelation::NoDamageTo => 0,
            DamageRelation::NoDamageFrom => 1,
            DamageRelation::QuarterDamageTo => 2,
            DamageRelation::QuarterDamageFrom => 3,
            DamageRelation::HalfDamageTo => 4,
            DamageRelation::HalfDamageFrom => 5,
            DamageRelation::NormalDamageTo => 6,
            DamageRelation::NormalDamageFrom => 7,
            DamageRelation::DoubleDamageTo => 8,
            DamageRelation::DoubleDamageFrom => 9,
            DamageRelation::QuadrupleDamageFrom => 10,
            DamageRelation::QuadrupleDamageTo => 11,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CoverageError> {
        DamageRelation::ALL
            .into_iter()
            .find(|relation| relation.code() == code)
            .ok_or_else(|| CoverageError::UnknownRelation(code.to_string()))
    }

    /// Same magnitude in the other family
    pub fn flip(self) -> Self {
        DamageRelation::ALL[(self.index() + 6) % 12]
    }

    fn from_strength(family: RelationFamily, strength: usize) -> Self {
        match family {
            RelationFamily::Offensive => DamageRelation::TO[strength],
            RelationFamily::Defensive => DamageRelation::FROM[strength],
        }
    }
}

impl PartialOrd for DamageRelation {
    /// Relations of the same family order by multiplier; across families
    /// they are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.family() != other.family() {
            return None;
        }
        Some(self.strength().cmp(&other.strength()))
    }
}

impl FromStr for DamageRelation {
    type Err = CoverageError;

    /// Accepts `double_damage_from`, `double-damage-from` and
    /// `Double Damage From`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace([' ', '-'], "_");

        DamageRelation::ALL
            .into_iter()
            .find(|relation| relation.api_key() == normalized)
            .ok_or_else(|| CoverageError::UnknownRelation(s.to_string()))
    }
}

impl fmt::Display for DamageRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combine the defensive relations several sources list for one attacking
/// type into a single relation.
///
/// Immunity wins outright. A quadruple listing counts as two doubles and a
/// quarter listing as two halves, so feeding an already combined result
/// back in gives the same answer. Offensive relations are ignored.
pub fn combine_defensive<I>(relations: I) -> DamageRelation
where
    I: IntoIterator<Item = DamageRelation>,
{
    let mut immune = false;
    let mut doubles = 0usize;
    let mut halves = 0usize;

    for relation in relations {
        match relation {
            DamageRelation::NoDamageFrom => immune = true,
            DamageRelation::QuarterDamageFrom => halves += 2,
            DamageRelation::HalfDamageFrom => halves += 1,
            DamageRelation::DoubleDamageFrom => doubles += 1,
            DamageRelation::QuadrupleDamageFrom => doubles += 2,
            _ => {}
        }
    }

    let strength = if immune {
        0
    } else if doubles >= 2 {
        5
    } else if doubles >= 1 && halves >= 1 {
        3
    } else if halves >= 2 {
        1
    } else if doubles == 1 {
        4
    } else if halves == 1 {
        2
    } else {
        3
    };

    DamageRelation::from_strength(RelationFamily::Defensive, strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_twelve_relations() {
        assert_eq!(DamageRelation::ALL.len(), 12);
        assert!(DamageRelation::TO.iter().all(|r| r.is_offensive()));
        assert!(DamageRelation::FROM.iter().all(|r| !r.is_offensive()));
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(DamageRelation::NoDamageTo.multiplier(), Multiplier::ZERO);
        assert_eq!(DamageRelation::QuarterDamageFrom.multiplier_label(), "1/4x");
        assert_eq!(DamageRelation::HalfDamageTo.multiplier_label(), "1/2x");
        assert_eq!(DamageRelation::NormalDamageFrom.multiplier_label(), "1x");
        assert_eq!(DamageRelation::DoubleDamageTo.multiplier_label(), "2x");
        assert_eq!(DamageRelation::QuadrupleDamageFrom.multiplier().as_f32(), 4.0);
    }

    #[test]
    fn test_multiplier_ordering() {
        assert!(Multiplier::ZERO < Multiplier::QUARTER);
        assert!(Multiplier::QUARTER < Multiplier::HALF);
        assert!(Multiplier::HALF < Multiplier::ONE);
        assert!(Multiplier::DOUBLE < Multiplier::QUADRUPLE);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DamageRelation::DoubleDamageTo.label(), "Double Damage To");
        assert_eq!(DamageRelation::NoDamageFrom.to_string(), "No Damage From");
    }

    #[test]
    fn test_codes_round_trip() {
        for relation in DamageRelation::ALL {
            assert_eq!(DamageRelation::from_code(relation.code()).unwrap(), relation);
        }
        assert_eq!(DamageRelation::QuadrupleDamageFrom.code(), 10);
        assert_eq!(DamageRelation::QuadrupleDamageTo.code(), 11);
        assert!(DamageRelation::from_code(12).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "double_damage_from".parse::<DamageRelation>().unwrap(),
            DamageRelation::DoubleDamageFrom
        );
        assert_eq!(
            "Half Damage To".parse::<DamageRelation>().unwrap(),
            DamageRelation::HalfDamageTo
        );
        assert_eq!(
            "triple_damage_to".parse::<DamageRelation>(),
            Err(CoverageError::UnknownRelation("triple_damage_to".to_string()))
        );
    }

    #[test]
    fn test_flip() {
        assert_eq!(DamageRelation::HalfDamageTo.flip(), DamageRelation::HalfDamageFrom);
        assert_eq!(DamageRelation::QuadrupleDamageFrom.flip(), DamageRelation::QuadrupleDamageTo);
    }

    #[test]
    fn test_same_family_compares_by_multiplier() {
        assert!(DamageRelation::DoubleDamageTo > DamageRelation::HalfDamageTo);
        assert!(DamageRelation::NoDamageFrom < DamageRelation::QuarterDamageFrom);
        assert_eq!(
            DamageRelation::DoubleDamageTo.partial_cmp(&DamageRelation::HalfDamageFrom),
            None
        );
    }

    #[test]
    fn test_combine_immunity_wins() {
        let relation = combine_defensive([
            DamageRelation::DoubleDamageFrom,
            DamageRelation::NoDamageFrom,
        ]);
        assert_eq!(relation, DamageRelation::NoDamageFrom);
    }

    #[test]
    fn test_combine_rules() {
        use DamageRelation::*;

        assert_eq!(combine_defensive([DoubleDamageFrom, DoubleDamageFrom]), QuadrupleDamageFrom);
        assert_eq!(combine_defensive([DoubleDamageFrom, HalfDamageFrom]), NormalDamageFrom);
        assert_eq!(combine_defensive([HalfDamageFrom, HalfDamageFrom]), QuarterDamageFrom);
        assert_eq!(combine_defensive([DoubleDamageFrom]), DoubleDamageFrom);
        assert_eq!(combine_defensive([HalfDamageFrom]), HalfDamageFrom);
        assert_eq!(combine_defensive([]), NormalDamageFrom);
    }

    #[test]
    fn test_combine_is_idempotent_on_combined_results() {
        use DamageRelation::*;

        assert_eq!(combine_defensive([QuadrupleDamageFrom]), QuadrupleDamageFrom);
        assert_eq!(combine_defensive([QuarterDamageFrom]), QuarterDamageFrom);
        assert_eq!(combine_defensive([NormalDamageFrom]), NormalDamageFrom);
    }

    #[test]
    fn test_combine_ignores_offensive_relations() {
        use DamageRelation::*;

        assert_eq!(combine_defensive([DoubleDamageTo, NoDamageTo]), NormalDamageFrom);
    }
}
