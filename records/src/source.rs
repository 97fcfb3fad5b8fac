use std::cell::Cell;
use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::RecordError;
use crate::resource::{IdOrName, NamedResource, ResourceKind};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No {kind} found for '{key}'")]
    NotFound { kind: ResourceKind, key: IdOrName },

    #[error("Request for {resource} failed: {message}")]
    Transport { resource: String, message: String },

    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Anything that can hand out raw JSON bodies for the API's resources.
///
/// The HTTP client and the in-memory fixture store both implement this, so
/// the rest of the workspace never cares where a record came from.
pub trait DataSource {
    fn fetch(&self, kind: ResourceKind, key: &IdOrName) -> Result<String, SourceError>;

    fn list(&self, kind: ResourceKind) -> Result<Vec<NamedResource>, SourceError>;

    fn fetch_record<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        key: &IdOrName,
    ) -> Result<T, SourceError>
    where
        Self: Sized,
    {
        let body = self.fetch(kind, key)?;
        serde_json::from_str(&body).map_err(|source| SourceError::Decode {
            resource: kind.resource_path(key),
            source,
        })
    }
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn fetch(&self, kind: ResourceKind, key: &IdOrName) -> Result<String, SourceError> {
        (**self).fetch(kind, key)
    }

    fn list(&self, kind: ResourceKind) -> Result<Vec<NamedResource>, SourceError> {
        (**self).list(kind)
    }
}

#[derive(Deserialize)]
struct Header {
    id: u32,
    name: String,
}

const MEMORY_BASE_URL: &str = "memory://pokeapi/api/v2";

/// In-memory store of raw JSON bodies, addressable by id and by name.
#[derive(Debug, Default)]
pub struct MemorySource {
    bodies: HashMap<(ResourceKind, IdOrName), String>,
    listings: HashMap<ResourceKind, Vec<NamedResource>>,
    fetches: Cell<usize>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one record body. The body must carry `id` and `name`.
    pub fn insert_json(&mut self, kind: ResourceKind, body: &str) -> Result<(), SourceError> {
        let header: Header = serde_json::from_str(body).map_err(|source| SourceError::Decode {
            resource: kind.path().to_string(),
            source,
        })?;

        self.bodies
            .insert((kind, IdOrName::Id(header.id)), body.to_string());
        self.bodies
            .insert((kind, IdOrName::Name(header.name.clone())), body.to_string());

        let url = format!("{MEMORY_BASE_URL}/{}/{}/", kind.path(), header.id);
        let listing = self.listings.entry(kind).or_default();
        listing.retain(|resource| resource.name != header.name);
        listing.push(NamedResource::new(header.name, url));

        Ok(())
    }

    /// Register every element of a JSON array.
    pub fn insert_array(&mut self, kind: ResourceKind, array: &str) -> Result<usize, SourceError> {
        let values: Vec<serde_json::Value> =
            serde_json::from_str(array).map_err(|source| SourceError::Decode {
                resource: kind.path().to_string(),
                source,
            })?;

        for value in &values {
            self.insert_json(kind, &value.to_string())?;
        }

        Ok(values.len())
    }

    /// Number of `fetch` calls served so far, hits and misses alike.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl DataSource for MemorySource {
    fn fetch(&self, kind: ResourceKind, key: &IdOrName) -> Result<String, SourceError> {
        self.fetches.set(self.fetches.get() + 1);

        self.bodies
            .get(&(kind, key.clone()))
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                kind,
                key: key.clone(),
            })
    }

    fn list(&self, kind: ResourceKind) -> Result<Vec<NamedResource>, SourceError> {
        Ok(self.listings.get(&kind).cloned().unwrap_or_default())
    }
}
