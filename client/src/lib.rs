//! Blocking HTTP data source for PokeAPI.
//!
//! One request per lookup, no retries. Memoization is left to the caller
//! (see `trainer_coverage::Pokedex`).

mod config;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use thiserror::Error;
use trainer_records::{
    DataSource, IdOrName, NamedResource, ResourceKind, ResourceList, SourceError,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    config: ClientConfig,
}

impl PokeApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/{resource}/{key}/`
    pub fn resource_url(&self, kind: ResourceKind, key: &IdOrName) -> String {
        format!("{}/{}/{}/", self.config.base_url, kind.path(), key)
    }

    /// First page of the listing for a resource
    pub fn listing_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}/?limit=100000", self.config.base_url, kind.path())
    }

    fn get(&self, url: &str, resource: &str) -> Result<Response, SourceError> {
        tracing::debug!(%url, "GET");
        self.http.get(url).send().map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            SourceError::Transport {
                resource: resource.to_string(),
                message: e.to_string(),
            }
        })
    }
}

fn check_status(status: StatusCode, resource: &str) -> Result<(), SourceError> {
    if status.is_success() {
        return Ok(());
    }
    Err(SourceError::Transport {
        resource: resource.to_string(),
        message: format!("unexpected status {status}"),
    })
}

/// Like [`check_status`], but a 404 means the looked up key does not exist.
fn check_lookup_status(
    status: StatusCode,
    kind: ResourceKind,
    key: &IdOrName,
    resource: &str,
) -> Result<(), SourceError> {
    if status == StatusCode::NOT_FOUND {
        tracing::warn!(%resource, "not found");
        return Err(SourceError::NotFound {
            kind,
            key: key.clone(),
        });
    }
    check_status(status, resource)
}

fn read_body(response: Response, resource: &str) -> Result<String, SourceError> {
    check_status(response.status(), resource)?;

    response.text().map_err(|e| SourceError::Transport {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

impl DataSource for PokeApiClient {
    fn fetch(&self, kind: ResourceKind, key: &IdOrName) -> Result<String, SourceError> {
        let resource = kind.resource_path(key);
        let response = self.get(&self.resource_url(kind, key), &resource)?;

        check_lookup_status(response.status(), kind, key, &resource)?;
        read_body(response, &resource)
    }

    fn list(&self, kind: ResourceKind) -> Result<Vec<NamedResource>, SourceError> {
        let resource = kind.path().to_string();
        let mut next = Some(self.listing_url(kind));
        let mut results = Vec::new();

        while let Some(url) = next {
            let body = read_body(self.get(&url, &resource)?, &resource)?;
            let page: ResourceList =
                serde_json::from_str(&body).map_err(|source| SourceError::Decode {
                    resource: resource.clone(),
                    source,
                })?;

            results.extend(page.results);
            next = page.next;
        }

        Ok(results)
    }
}
