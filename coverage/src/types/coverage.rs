//! Type coverage tables and the operations that combine them

use std::collections::{HashMap, HashSet};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::CoverageError;
use crate::types::pokemon_type::TypeRef;
use crate::types::relation::{DamageRelation, combine_defensive};

/// Type references filed under each of the twelve damage relations.
///
/// Every relation is always present. Lists keep insertion order and may hold
/// the same type more than once; call [`TypeCoverage::unique`] to dedupe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCoverage {
    relations: [Vec<TypeRef>; 12],
}

/// Anything that can describe itself as a [`TypeCoverage`].
///
/// Coverage arithmetic (`+`, `-`, `+=`, `-=`) accepts any implementor on the
/// right-hand side.
pub trait HasTypeCoverage {
    fn type_coverage(&self) -> TypeCoverage;
}

impl TypeCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relation: DamageRelation) -> &[TypeRef] {
        &self.relations[relation.index()]
    }

    /// Replace one relation list.
    pub fn set<I>(&mut self, relation: DamageRelation, types: I)
    where
        I: IntoIterator<Item = TypeRef>,
    {
        self.relations[relation.index()] = types.into_iter().collect();
    }

    /// Replace one relation list addressed by its text key.
    pub fn set_named<I>(&mut self, key: &str, types: I) -> Result<(), CoverageError>
    where
        I: IntoIterator<Item = TypeRef>,
    {
        let relation: DamageRelation = key.parse()?;
        self.set(relation, types);
        Ok(())
    }

    pub fn push(&mut self, relation: DamageRelation, type_ref: TypeRef) {
        self.relations[relation.index()].push(type_ref);
    }

    pub fn clear_relation(&mut self, relation: DamageRelation) {
        self.relations[relation.index()].clear();
    }

    pub fn clear(&mut self) {
        for list in &mut self.relations {
            list.clear();
        }
    }

    /// Relations in [`DamageRelation::ALL`] order with their lists.
    pub fn iter(&self) -> impl Iterator<Item = (DamageRelation, &[TypeRef])> {
        DamageRelation::ALL
            .into_iter()
            .map(move |relation| (relation, self.get(relation)))
    }

    pub fn is_empty(&self) -> bool {
        self.relations.iter().all(Vec::is_empty)
    }

    /// Total number of entries across all relations.
    pub fn entry_count(&self) -> usize {
        self.relations.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, relation: DamageRelation, type_ref: &TypeRef) -> bool {
        self.get(relation).contains(type_ref)
    }

    /// Per relation, this coverage's entries followed by `other`'s.
    pub fn union(&self, other: &TypeCoverage) -> TypeCoverage {
        let mut result = self.clone();
        result.extend(other);
        result
    }

    pub fn extend(&mut self, other: &TypeCoverage) {
        for (list, more) in self.relations.iter_mut().zip(&other.relations) {
            list.extend(more.iter().cloned());
        }
    }

    /// Multiset difference: each entry in `other` removes at most one
    /// matching entry here. Entries of `other` not present are ignored.
    pub fn difference(&self, other: &TypeCoverage) -> TypeCoverage {
        let mut result = self.clone();
        result.subtract(other);
        result
    }

    pub fn subtract(&mut self, other: &TypeCoverage) {
        for (list, removed) in self.relations.iter_mut().zip(&other.relations) {
            for type_ref in removed {
                if let Some(position) = list.iter().position(|t| t == type_ref) {
                    list.remove(position);
                }
            }
        }
    }

    /// Dedupe every relation, keeping first occurrences in order.
    pub fn unique(&self) -> TypeCoverage {
        let mut result = TypeCoverage::new();
        for (relation, list) in self.iter() {
            result.set(relation, dedupe(list.iter().cloned()));
        }
        result
    }

    /// Entries listed more than once under the same relation.
    ///
    /// With `unique` each repeated type appears once; otherwise it appears
    /// one fewer time than in this coverage.
    pub fn overlap(&self, unique: bool) -> TypeCoverage {
        let mut result = TypeCoverage::new();
        for (relation, list) in self.iter() {
            let mut seen = HashSet::new();
            let repeats: Vec<TypeRef> = list
                .iter()
                .filter(|type_ref| !seen.insert(*type_ref))
                .cloned()
                .collect();

            if unique {
                result.set(relation, dedupe(repeats));
            } else {
                result.set(relation, repeats);
            }
        }
        result
    }

    /// Entries of the offensive relations, weakest relation first.
    pub fn offensive_types(&self, unique: bool) -> Vec<TypeRef> {
        self.collect_types(&DamageRelation::TO, unique)
    }

    /// Entries of the defensive relations, weakest relation first.
    pub fn defensive_types(&self, unique: bool) -> Vec<TypeRef> {
        self.collect_types(&DamageRelation::FROM, unique)
    }

    pub fn types(&self, unique: bool) -> Vec<TypeRef> {
        self.collect_types(&DamageRelation::ALL, unique)
    }

    fn collect_types(&self, relations: &[DamageRelation], unique: bool) -> Vec<TypeRef> {
        let types = relations
            .iter()
            .flat_map(|relation| self.get(*relation).iter().cloned());

        if unique { dedupe(types) } else { types.collect() }
    }

    /// Only the offensive relations.
    pub fn offensive(&self) -> TypeCoverage {
        self.filtered(&DamageRelation::TO)
    }

    /// Only the defensive relations.
    pub fn defensive(&self) -> TypeCoverage {
        self.filtered(&DamageRelation::FROM)
    }

    fn filtered(&self, relations: &[DamageRelation]) -> TypeCoverage {
        let mut result = TypeCoverage::new();
        for relation in relations {
            result.set(*relation, self.get(*relation).iter().cloned());
        }
        result
    }

    /// Combined damage taken from `target`, treating every listing under a
    /// defensive relation as one source.
    pub fn damage_relation_from(&self, target: &TypeRef) -> DamageRelation {
        let listings = DamageRelation::FROM.into_iter().flat_map(move |relation| {
            self.get(relation)
                .iter()
                .filter(move |type_ref| *type_ref == target)
                .map(move |_| relation)
        });

        combine_defensive(listings)
    }

    /// Strongest offensive relation listing `target`, if any.
    pub fn strongest_relation_to(&self, target: &TypeRef) -> Option<DamageRelation> {
        DamageRelation::TO
            .into_iter()
            .rev()
            .find(|relation| self.contains(*relation, target))
    }

    /// Keep each type only in the strongest offensive relation that lists
    /// it. Entries in the winning relation keep their multiplicity;
    /// defensive relations pass through untouched.
    pub fn resolve_offense(&self) -> TypeCoverage {
        let mut best: HashMap<&TypeRef, Option<DamageRelation>> = HashMap::new();
        for relation in DamageRelation::TO {
            for type_ref in self.get(relation) {
                best.entry(type_ref)
                    .or_insert_with(|| self.strongest_relation_to(type_ref));
            }
        }

        let mut result = self.clone();
        for relation in DamageRelation::TO {
            let kept: Vec<TypeRef> = self
                .get(relation)
                .iter()
                .filter(|type_ref| best.get(type_ref) == Some(&Some(relation)))
                .cloned()
                .collect();
            result.set(relation, kept);
        }
        result
    }

    /// Coverage with every type in at most one relation per family.
    ///
    /// Defensive entries are re-filed under their combined relation, one
    /// copy each. Offensive entries are collapsed to their strongest
    /// relation and deduplicated.
    pub fn effective_coverage(&self) -> TypeCoverage {
        let mut result = self.effective_offensive_coverage();
        result.extend(&self.effective_defensive_coverage());
        result
    }

    pub fn effective_offensive_coverage(&self) -> TypeCoverage {
        self.offensive().resolve_offense().unique()
    }

    pub fn effective_defensive_coverage(&self) -> TypeCoverage {
        let mut result = TypeCoverage::new();
        for type_ref in self.defensive_types(true) {
            let relation = self.damage_relation_from(&type_ref);
            result.push(relation, type_ref);
        }
        result
    }
}

fn dedupe<I>(types: I) -> Vec<TypeRef>
where
    I: IntoIterator<Item = TypeRef>,
{
    let mut seen = HashSet::new();
    types
        .into_iter()
        .filter(|type_ref| seen.insert(type_ref.clone()))
        .collect()
}

impl HasTypeCoverage for TypeCoverage {
    fn type_coverage(&self) -> TypeCoverage {
        self.clone()
    }
}

impl<T: HasTypeCoverage + ?Sized> AddAssign<&T> for TypeCoverage {
    fn add_assign(&mut self, rhs: &T) {
        self.extend(&rhs.type_coverage());
    }
}

impl<T: HasTypeCoverage + ?Sized> SubAssign<&T> for TypeCoverage {
    fn sub_assign(&mut self, rhs: &T) {
        self.subtract(&rhs.type_coverage());
    }
}

impl<T: HasTypeCoverage + ?Sized> Add<&T> for &TypeCoverage {
    type Output = TypeCoverage;

    fn add(self, rhs: &T) -> TypeCoverage {
        self.union(&rhs.type_coverage())
    }
}

impl<T: HasTypeCoverage + ?Sized> Add<&T> for TypeCoverage {
    type Output = TypeCoverage;

    fn add(mut self, rhs: &T) -> TypeCoverage {
        self += rhs;
        self
    }
}

impl<T: HasTypeCoverage + ?Sized> Sub<&T> for &TypeCoverage {
    type Output = TypeCoverage;

    fn sub(self, rhs: &T) -> TypeCoverage {
        self.difference(&rhs.type_coverage())
    }
}

impl<T: HasTypeCoverage + ?Sized> Sub<&T> for TypeCoverage {
    type Output = TypeCoverage;

    fn sub(mut self, rhs: &T) -> TypeCoverage {
        self -= rhs;
        self
    }
}
