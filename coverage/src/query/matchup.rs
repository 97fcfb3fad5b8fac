//! Type matchup helpers

use std::rc::Rc;

use crate::types::{DamageRelation, Type, TypeCoverage, TypeRef, combine_defensive};

/// Combined relation when `attacking` hits a defender with these types
pub fn damage_relation_from_types(defenders: &[Rc<Type>], attacking: &TypeRef) -> DamageRelation {
    combine_defensive(
        defenders
            .iter()
            .map(|defender| defender.damage_relation_from_type(attacking)),
    )
}

/// Check if the defender takes double or quadruple damage from `attacking`
pub fn is_weak_to(defenders: &[Rc<Type>], attacking: &TypeRef) -> bool {
    matches!(
        damage_relation_from_types(defenders, attacking),
        DamageRelation::DoubleDamageFrom | DamageRelation::QuadrupleDamageFrom
    )
}

/// Check if the defender takes half or quarter damage from `attacking`
pub fn resists(defenders: &[Rc<Type>], attacking: &TypeRef) -> bool {
    matches!(
        damage_relation_from_types(defenders, attacking),
        DamageRelation::HalfDamageFrom | DamageRelation::QuarterDamageFrom
    )
}

/// Check if the defender takes no damage from `attacking`
pub fn is_immune_to(defenders: &[Rc<Type>], attacking: &TypeRef) -> bool {
    damage_relation_from_types(defenders, attacking) == DamageRelation::NoDamageFrom
}

/// Check if the defender is weak to any of the attacking types
pub fn is_weak_to_any(defenders: &[Rc<Type>], attacking: &[TypeRef]) -> bool {
    attacking.iter().any(|t| is_weak_to(defenders, t))
}

/// Check if the defender resists or is immune to every attacking type
pub fn resists_all(defenders: &[Rc<Type>], attacking: &[TypeRef]) -> bool {
    if attacking.is_empty() {
        return false;
    }
    attacking
        .iter()
        .all(|t| resists(defenders, t) || is_immune_to(defenders, t))
}

/// Types dealing double or quadruple damage, strongest first
pub fn weaknesses(defenders: &[Rc<Type>]) -> Vec<TypeRef> {
    listed_under(
        defenders,
        &[DamageRelation::QuadrupleDamageFrom, DamageRelation::DoubleDamageFrom],
    )
}

/// Types dealing half or quarter damage, weakest first
pub fn resistances(defenders: &[Rc<Type>]) -> Vec<TypeRef> {
    listed_under(
        defenders,
        &[DamageRelation::QuarterDamageFrom, DamageRelation::HalfDamageFrom],
    )
}

/// Types dealing no damage
pub fn immunities(defenders: &[Rc<Type>]) -> Vec<TypeRef> {
    listed_under(defenders, &[DamageRelation::NoDamageFrom])
}

fn listed_under(defenders: &[Rc<Type>], relations: &[DamageRelation]) -> Vec<TypeRef> {
    let mut coverage = TypeCoverage::new();
    for defender in defenders {
        coverage.extend(defender.coverage());
    }

    let effective = coverage.effective_defensive_coverage();
    relations
        .iter()
        .flat_map(|relation| effective.get(*relation).iter().cloned())
        .collect()
}
