//! Types and type references

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use trainer_records::{NamedResource, TypeRecord};

use crate::CoverageError;
use crate::types::coverage::{HasTypeCoverage, TypeCoverage};
use crate::types::relation::DamageRelation;

/// Identity of a type: the id and name pair the API hands out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub id: u32,
    pub name: String,
}

impl TypeRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Build from an API reference, taking the id from its URL.
    pub fn from_resource(resource: &NamedResource) -> Result<Self, CoverageError> {
        Ok(Self::new(resource.id()?, resource.name.clone()))
    }
}

impl Ord for TypeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for TypeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A type together with its relation to every other type.
#[derive(Debug, Clone)]
pub struct Type {
    key: TypeRef,
    coverage: TypeCoverage,
}

impl Type {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            key: TypeRef::new(id, name),
            coverage: TypeCoverage::new(),
        }
    }

    pub fn with_coverage(id: u32, name: impl Into<String>, coverage: TypeCoverage) -> Self {
        Self {
            key: TypeRef::new(id, name),
            coverage,
        }
    }

    /// Build from a `/type` record, filling the coverage from its six
    /// relation lists.
    pub fn from_record(record: &TypeRecord) -> Result<Self, CoverageError> {
        let mut coverage = TypeCoverage::new();
        for (key, resources) in record.damage_relations.entries() {
            let types = resources
                .iter()
                .map(TypeRef::from_resource)
                .collect::<Result<Vec<_>, _>>()?;
            coverage.set_named(key, types)?;
        }

        Ok(Self::with_coverage(record.id, record.name.clone(), coverage))
    }

    pub fn id(&self) -> u32 {
        self.key.id
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.key
    }

    pub fn coverage(&self) -> &TypeCoverage {
        &self.coverage
    }

    /// Append types to one relation list.
    pub fn set_damage_relation<I>(&mut self, relation: DamageRelation, types: I)
    where
        I: IntoIterator<Item = TypeRef>,
    {
        for type_ref in types {
            self.coverage.push(relation, type_ref);
        }
    }

    /// Relation this type has attacking `other`; normal unless listed.
    pub fn damage_relation_to_type(&self, other: &TypeRef) -> DamageRelation {
        self.first_listed(&DamageRelation::TO, other)
            .unwrap_or(DamageRelation::NormalDamageTo)
    }

    /// Relation this type has when hit by `other`; normal unless listed.
    pub fn damage_relation_from_type(&self, other: &TypeRef) -> DamageRelation {
        self.first_listed(&DamageRelation::FROM, other)
            .unwrap_or(DamageRelation::NormalDamageFrom)
    }

    fn first_listed(&self, family: &[DamageRelation], other: &TypeRef) -> Option<DamageRelation> {
        family
            .iter()
            .copied()
            .find(|relation| self.coverage.get(*relation).contains(other))
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl AsRef<TypeRef> for Type {
    fn as_ref(&self) -> &TypeRef {
        &self.key
    }
}

impl From<&Type> for TypeRef {
    fn from(value: &Type) -> Self {
        value.key.clone()
    }
}

impl HasTypeCoverage for Type {
    fn type_coverage(&self) -> TypeCoverage {
        self.coverage.clone()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainer_records::testing::TYPES_JSON;

    fn record(name: &str) -> TypeRecord {
        let records: Vec<TypeRecord> = serde_json::from_str(TYPES_JSON).unwrap();
        records.into_iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_type_equality_by_id_and_name() {
        let fire = Type::new(10, "fire");
        let mut other = Type::new(10, "fire");
        other.set_damage_relation(DamageRelation::HalfDamageTo, [TypeRef::new(11, "water")]);

        assert_eq!(fire, other);
        assert_ne!(fire, Type::new(10, "Fire"));
        assert_ne!(fire, Type::new(11, "fire"));
    }

    #[test]
    fn test_type_ref_ordering() {
        let mut refs = vec![
            TypeRef::new(10, "fire"),
            TypeRef::new(2, "fighting"),
            TypeRef::new(1, "fire"),
        ];
        refs.sort();

        assert_eq!(
            refs,
            vec![
                TypeRef::new(2, "fighting"),
                TypeRef::new(1, "fire"),
                TypeRef::new(10, "fire"),
            ]
        );
    }

    #[test]
    fn test_set_damage_relation_appends() {
        let mut fire = Type::new(10, "fire");
        fire.set_damage_relation(DamageRelation::DoubleDamageTo, [TypeRef::new(12, "grass")]);
        fire.set_damage_relation(DamageRelation::DoubleDamageTo, [TypeRef::new(15, "ice")]);

        assert_eq!(fire.coverage().get(DamageRelation::DoubleDamageTo).len(), 2);
    }

    #[test]
    fn test_from_record() {
        let ground = Type::from_record(&record("ground")).unwrap();
        let electric = TypeRef::new(13, "electric");
        let flying = TypeRef::new(3, "flying");
        let water = TypeRef::new(11, "water");

        assert_eq!(ground.id(), 5);
        assert_eq!(ground.damage_relation_from_type(&electric), DamageRelation::NoDamageFrom);
        assert_eq!(ground.damage_relation_to_type(&flying), DamageRelation::NoDamageTo);
        assert_eq!(ground.damage_relation_to_type(&electric), DamageRelation::DoubleDamageTo);
        assert_eq!(ground.damage_relation_from_type(&water), DamageRelation::DoubleDamageFrom);
    }

    #[test]
    fn test_unlisted_relation_is_normal() {
        let normal = Type::from_record(&record("normal")).unwrap();
        let fire = TypeRef::new(10, "fire");

        assert_eq!(normal.damage_relation_to_type(&fire), DamageRelation::NormalDamageTo);
        assert_eq!(normal.damage_relation_from_type(&fire), DamageRelation::NormalDamageFrom);
    }

    #[test]
    fn test_from_record_rejects_url_without_id() {
        let json = r#"{
            "id": 99, "name": "odd",
            "damage_relations": {"double_damage_to": [{"name": "fire", "url": "/type/fire/"}]}
        }"#;
        let record: TypeRecord = serde_json::from_str(json).unwrap();

        assert!(matches!(Type::from_record(&record), Err(CoverageError::Record(_))));
    }
}
