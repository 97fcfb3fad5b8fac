//! Species and their defensive typing

use std::fmt;
use std::rc::Rc;

use crate::CoverageError;
use crate::query;
use crate::types::coverage::{HasTypeCoverage, TypeCoverage};
use crate::types::pokemon_type::{Type, TypeRef};
use crate::types::relation::DamageRelation;
use crate::types::stats::StatSet;

/// A species with one or two types and the effort values it yields when
/// defeated.
#[derive(Debug, Clone)]
pub struct Species {
    id: u32,
    name: String,
    types: Vec<Rc<Type>>,
    evs: StatSet,
}

impl Species {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: Vec<Rc<Type>>,
        evs: StatSet,
    ) -> Result<Self, CoverageError> {
        match types.len() {
            0 => return Err(CoverageError::NoTypes),
            1 | 2 => {}
            n => return Err(CoverageError::TooManyTypes(n)),
        }

        Ok(Self {
            id,
            name: name.into(),
            types,
            evs,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[Rc<Type>] {
        &self.types
    }

    pub fn type_refs(&self) -> Vec<TypeRef> {
        self.types.iter().map(|t| t.type_ref().clone()).collect()
    }

    /// Base effort value yield
    pub fn evs(&self) -> StatSet {
        self.evs
    }

    pub fn damage_relation_from_type(&self, attacking: &TypeRef) -> DamageRelation {
        query::damage_relation_from_types(&self.types, attacking)
    }

    /// Takes double or quadruple damage
    pub fn is_vulnerable_to(&self, attacking: &TypeRef) -> bool {
        query::is_weak_to(&self.types, attacking)
    }

    /// Takes half or quarter damage
    pub fn is_resistant_to(&self, attacking: &TypeRef) -> bool {
        query::resists(&self.types, attacking)
    }

    pub fn is_immune_to(&self, attacking: &TypeRef) -> bool {
        query::is_immune_to(&self.types, attacking)
    }

    pub fn vulnerabilities(&self) -> Vec<TypeRef> {
        query::weaknesses(&self.types)
    }

    pub fn resistances(&self) -> Vec<TypeRef> {
        query::resistances(&self.types)
    }

    pub fn immunities(&self) -> Vec<TypeRef> {
        query::immunities(&self.types)
    }
}

impl PartialEq for Species {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Species {}

impl HasTypeCoverage for Species {
    /// Union of the species' types, reduced so every opposing type sits in
    /// one relation per family.
    fn type_coverage(&self) -> TypeCoverage {
        let mut coverage = TypeCoverage::new();
        for type_ in &self.types {
            coverage.extend(type_.coverage());
        }
        coverage.effective_coverage()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ghost() -> TypeRef {
        TypeRef::new(8, "ghost")
    }

    fn normal() -> TypeRef {
        TypeRef::new(1, "normal")
    }

    fn fighting() -> TypeRef {
        TypeRef::new(2, "fighting")
    }

    fn psychic() -> TypeRef {
        TypeRef::new(14, "psychic")
    }

    fn dark() -> TypeRef {
        TypeRef::new(17, "dark")
    }

    fn ghost_type() -> Rc<Type> {
        let mut t = Type::new(8, "ghost");
        t.set_damage_relation(DamageRelation::NoDamageFrom, [normal(), fighting()]);
        t.set_damage_relation(DamageRelation::DoubleDamageFrom, [ghost(), dark()]);
        Rc::new(t)
    }

    fn normal_type() -> Rc<Type> {
        let mut t = Type::new(1, "normal");
        t.set_damage_relation(DamageRelation::NoDamageFrom, [ghost()]);
        t.set_damage_relation(DamageRelation::DoubleDamageFrom, [fighting()]);
        Rc::new(t)
    }

    fn psychic_type() -> Rc<Type> {
        let mut t = Type::new(14, "psychic");
        t.set_damage_relation(DamageRelation::HalfDamageFrom, [fighting(), psychic()]);
        t.set_damage_relation(DamageRelation::DoubleDamageFrom, [ghost(), dark()]);
        Rc::new(t)
    }

    #[test]
    fn test_species_needs_one_or_two_types() {
        assert_eq!(
            Species::new(1, "nothing", vec![], StatSet::default()),
            Err(CoverageError::NoTypes)
        );

        let three = vec![ghost_type(), normal_type(), psychic_type()];
        assert_eq!(
            Species::new(1, "too-many", three, StatSet::default()).map(|s| s.id()),
            Err(CoverageError::TooManyTypes(3))
        );
    }

    #[test]
    fn test_immunity_overrides_weakness() {
        let odd = Species::new(
            9001,
            "ghost-normal",
            vec![ghost_type(), normal_type()],
            StatSet::default(),
        )
        .unwrap();

        assert_eq!(odd.damage_relation_from_type(&normal()), DamageRelation::NoDamageFrom);
        assert_eq!(odd.damage_relation_from_type(&fighting()), DamageRelation::NoDamageFrom);
        assert_eq!(odd.damage_relation_from_type(&ghost()), DamageRelation::NoDamageFrom);
        assert!(odd.is_immune_to(&fighting()));
        assert_eq!(odd.immunities(), vec![normal(), fighting(), ghost()]);
    }

    #[test]
    fn test_single_weakness_survives_partner_type() {
        let mut ghost_ = Type::new(8, "ghost");
        ghost_.set_damage_relation(DamageRelation::NoDamageFrom, [normal()]);
        ghost_.set_damage_relation(DamageRelation::DoubleDamageFrom, [psychic()]);
        let mut normal_ = Type::new(1, "normal");
        normal_.set_damage_relation(DamageRelation::NoDamageFrom, [ghost()]);
        normal_.set_damage_relation(DamageRelation::DoubleDamageFrom, [fighting()]);

        let odd = Species::new(
            9002,
            "ghost-normal",
            vec![Rc::new(ghost_), Rc::new(normal_)],
            StatSet::default(),
        )
        .unwrap();

        assert_eq!(odd.damage_relation_from_type(&psychic()), DamageRelation::DoubleDamageFrom);
        assert_eq!(odd.damage_relation_from_type(&normal()), DamageRelation::NoDamageFrom);
        assert_eq!(odd.damage_relation_from_type(&ghost()), DamageRelation::NoDamageFrom);
        assert_eq!(odd.damage_relation_from_type(&fighting()), DamageRelation::DoubleDamageFrom);
        assert_eq!(odd.damage_relation_from_type(&dark()), DamageRelation::NormalDamageFrom);
    }

    #[test]
    fn test_type_order_is_insignificant() {
        let a = Species::new(1, "a", vec![ghost_type(), psychic_type()], StatSet::default())
            .unwrap();
        let b = Species::new(2, "b", vec![psychic_type(), ghost_type()], StatSet::default())
            .unwrap();

        for attacking in [normal(), fighting(), ghost(), dark(), psychic()] {
            assert_eq!(a.damage_relation_from_type(&attacking), b.damage_relation_from_type(&attacking));
        }
        assert_eq!(a.damage_relation_from_type(&dark()), DamageRelation::QuadrupleDamageFrom);
    }

    #[test]
    fn test_coverage_is_reduced() {
        let species = Species::new(
            1,
            "ghost-psychic",
            vec![ghost_type(), psychic_type()],
            StatSet::default(),
        )
        .unwrap();
        let coverage = species.type_coverage();

        assert_eq!(
            coverage.get(DamageRelation::QuadrupleDamageFrom),
            &[ghost(), dark()]
        );
        assert_eq!(coverage.get(DamageRelation::NoDamageFrom), &[normal(), fighting()]);
        assert_eq!(coverage.get(DamageRelation::HalfDamageFrom), &[psychic()]);
        assert!(coverage.get(DamageRelation::DoubleDamageFrom).is_empty());
    }
}
