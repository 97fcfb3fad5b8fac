//! Lookup service that turns raw records into shared domain values

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use trainer_records::{
    DataSource, IdOrName, MoveRecord, PokemonRecord, RecordError, ResourceKind, SourceError,
    TypeRecord,
};

use crate::CoverageError;
use crate::types::{Move, Species, Stat, StatSet, Type, TypeRef};

#[derive(Error, Debug)]
pub enum DexError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl DexError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DexError::Source(e) if e.is_not_found())
    }
}

/// Builds [`Type`], [`Move`] and [`Species`] values from a [`DataSource`].
///
/// Every value is memoized under both its id and its name, so a key is
/// fetched at most once per `Pokedex`. Values are shared through `Rc` and
/// never change after construction.
#[derive(Debug)]
pub struct Pokedex<S> {
    source: S,
    types: HashMap<IdOrName, Rc<Type>>,
    moves: HashMap<IdOrName, Rc<Move>>,
    species: HashMap<IdOrName, Rc<Species>>,
}

impl<S: DataSource> Pokedex<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            types: HashMap::new(),
            moves: HashMap::new(),
            species: HashMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn type_(&mut self, key: &IdOrName) -> Result<Rc<Type>, DexError> {
        if let Some(found) = self.types.get(key) {
            tracing::debug!(resource = %ResourceKind::Type.resource_path(key), "cache hit");
            return Ok(found.clone());
        }

        tracing::debug!(resource = %ResourceKind::Type.resource_path(key), "fetching");
        let record: TypeRecord = self
            .source
            .fetch_record(ResourceKind::Type, key)
            .map_err(|e| lookup_failed(ResourceKind::Type, key, e))?;
        let built = Rc::new(Type::from_record(&record)?);
        remember(&mut self.types, record.id, &record.name, built.clone());
        Ok(built)
    }

    /// Resolve a reference by id, as found inside other records.
    pub fn type_of(&mut self, type_ref: &TypeRef) -> Result<Rc<Type>, DexError> {
        self.type_(&IdOrName::Id(type_ref.id))
    }

    /// Every type the source lists.
    pub fn all_types(&mut self) -> Result<Vec<Rc<Type>>, DexError> {
        let listing = self.source.list(ResourceKind::Type)?;
        listing
            .iter()
            .map(|resource| {
                let id = resource.id()?;
                self.type_(&IdOrName::Id(id))
            })
            .collect()
    }

    pub fn move_(&mut self, key: &IdOrName) -> Result<Rc<Move>, DexError> {
        if let Some(found) = self.moves.get(key) {
            tracing::debug!(resource = %ResourceKind::Move.resource_path(key), "cache hit");
            return Ok(found.clone());
        }

        tracing::debug!(resource = %ResourceKind::Move.resource_path(key), "fetching");
        let record: MoveRecord = self
            .source
            .fetch_record(ResourceKind::Move, key)
            .map_err(|e| lookup_failed(ResourceKind::Move, key, e))?;
        let move_type = self.type_(&IdOrName::Id(record.type_.id()?))?;
        let built = Rc::new(Move::from_record(&record, move_type)?);
        remember(&mut self.moves, record.id, &record.name, built.clone());
        Ok(built)
    }

    pub fn species(&mut self, key: &IdOrName) -> Result<Rc<Species>, DexError> {
        if let Some(found) = self.species.get(key) {
            tracing::debug!(resource = %ResourceKind::Pokemon.resource_path(key), "cache hit");
            return Ok(found.clone());
        }

        tracing::debug!(resource = %ResourceKind::Pokemon.resource_path(key), "fetching");
        let record: PokemonRecord = self
            .source
            .fetch_record(ResourceKind::Pokemon, key)
            .map_err(|e| lookup_failed(ResourceKind::Pokemon, key, e))?;
        let types = record
            .sorted_types()
            .into_iter()
            .map(|resource| self.type_(&IdOrName::Id(resource.id()?)))
            .collect::<Result<Vec<_>, _>>()?;

        let built = Rc::new(Species::new(
            record.id,
            record.name.clone(),
            types,
            effort_yield(&record)?,
        )?);
        remember(&mut self.species, record.id, &record.name, built.clone());
        Ok(built)
    }
}

fn lookup_failed(kind: ResourceKind, key: &IdOrName, error: SourceError) -> DexError {
    tracing::warn!(resource = %kind.resource_path(key), error = %error, "lookup failed");
    DexError::from(error)
}

fn remember<T>(cache: &mut HashMap<IdOrName, Rc<T>>, id: u32, name: &str, value: Rc<T>) {
    cache.insert(IdOrName::Id(id), value.clone());
    cache.insert(IdOrName::Name(name.to_string()), value);
}

fn effort_yield(record: &PokemonRecord) -> Result<StatSet, CoverageError> {
    let mut evs = StatSet::default();
    for entry in &record.stats {
        let stat: Stat = entry.stat.name.parse()?;
        evs.set(stat, entry.effort);
    }
    Ok(evs)
}
