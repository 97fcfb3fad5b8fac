use thiserror::Error;

pub mod record;
pub mod resource;
pub mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use record::{
    DamageRelationsRecord, EffectEntry, MoveMetaRecord, MoveRecord, PokemonRecord, StatRecord,
    TypeRecord, TypeSlot,
};
pub use resource::{IdOrName, NamedResource, ResourceKind, ResourceList, extract_id_or_name};
pub use source::{DataSource, MemorySource, SourceError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Empty lookup key")]
    EmptyKey,

    #[error("Resource URL has no path segment: {0}")]
    EmptyUrl(String),

    #[error("Expected a numeric id at the end of {0}")]
    MissingId(String),
}
