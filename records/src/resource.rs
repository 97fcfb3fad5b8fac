use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::RecordError;

/// The REST resources this workspace reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Type,
    Move,
    Pokemon,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Type, ResourceKind::Move, ResourceKind::Pokemon];

    /// Path segment used by the API for this resource.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Type => "type",
            ResourceKind::Move => "move",
            ResourceKind::Pokemon => "pokemon",
        }
    }

    /// `type/13`, `move/thunderbolt`; used in logs and error messages.
    pub fn resource_path(self, key: &IdOrName) -> String {
        format!("{}/{}", self.path(), key)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Lookup key for a resource. Names are normalized to the API's lowercase
/// hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdOrName {
    Id(u32),
    Name(String),
}

impl IdOrName {
    pub fn parse(input: &str) -> Result<Self, RecordError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RecordError::EmptyKey);
        }

        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(IdOrName::Id(id));
        }

        let name = trimmed
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        Ok(IdOrName::Name(name))
    }

    pub fn as_id(&self) -> Option<u32> {
        match self {
            IdOrName::Id(id) => Some(*id),
            IdOrName::Name(_) => None,
        }
    }
}

impl FromStr for IdOrName {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdOrName::parse(s)
    }
}

impl From<u32> for IdOrName {
    fn from(id: u32) -> Self {
        IdOrName::Id(id)
    }
}

impl fmt::Display for IdOrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdOrName::Id(id) => write!(f, "{id}"),
            IdOrName::Name(name) => f.write_str(name),
        }
    }
}

/// Take the final path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/type/13/` yields `Id(13)`; a trailing name
/// segment yields `Name`. Query strings and trailing slashes are ignored.
pub fn extract_id_or_name(url: &str) -> Result<IdOrName, RecordError> {
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    let path = match without_query.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or_default(),
        None => without_query,
    };

    let segment = path
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if segment.is_empty() {
        return Err(RecordError::EmptyUrl(url.to_string()));
    }

    match segment.parse::<u32>() {
        Ok(id) => Ok(IdOrName::Id(id)),
        Err(_) => Ok(IdOrName::Name(segment.to_string())),
    }
}

/// `{ "name": ..., "url": ... }` reference used throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id encoded in the URL.
    pub fn id(&self) -> Result<u32, RecordError> {
        match extract_id_or_name(&self.url)? {
            IdOrName::Id(id) => Ok(id),
            IdOrName::Name(_) => Err(RecordError::MissingId(self.url.clone())),
        }
    }
}

/// Paginated listing returned by `GET /{resource}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}
