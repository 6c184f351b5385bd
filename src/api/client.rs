//! PokeAPI Client
//!
//! Main client for fetching resources, combining URL construction, the HTTP
//! wrapper and typed deserialization.

use super::http::PokeHttpClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::commons::{ApiResource, NamedApiResource};
use crate::models::lists::{ApiResourceList, NamedApiResourceList};
use crate::models::pokemon::{LocationAreaEncounter, Pokemon};
use crate::resource::{Identifier, IntoIdentifier, Resource, ResourceKind};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Public PokeAPI v2 endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Main PokeAPI client
#[derive(Debug, Clone)]
pub struct PokeClient {
    pub http: PokeHttpClient,
    base_url: Url,
}

impl PokeClient {
    /// Create a client for the public API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against another deployment (or a mock server)
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: PokeHttpClient::new()?,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            http: PokeHttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // URL helpers
    // =========================================================================

    /// Build `<base>/<endpoint>/<id or name>/`
    pub fn resource_url(&self, kind: ResourceKind, id: &Identifier) -> Result<Url> {
        tracing::trace!("Formatting query url for {} '{}'", kind, id);
        Ok(self
            .base_url
            .join(&format!("{}/{}/", kind.endpoint(), id.path_segment()))?)
    }

    /// Build `<base>/<endpoint>/?offset=..&limit=..`
    pub fn list_url(&self, kind: ResourceKind, offset: u32, limit: u32) -> Result<Url> {
        let mut url = self.base_url.join(&format!("{}/", kind.endpoint()))?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// Validate an identifier for a resource type and build its URL
    ///
    /// Every check here runs before any request is sent.
    pub fn prepare(
        &self,
        kind: ResourceKind,
        id: impl IntoIdentifier,
    ) -> Result<(Identifier, Url)> {
        let id = id.into_identifier()?;
        if id.is_name() && !kind.accepts_names() {
            return Err(Error::NameNotSupported { kind });
        }
        let url = self.resource_url(kind, &id)?;
        Ok((id, url))
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetch a resource as raw JSON
    pub async fn get_json(&self, kind: ResourceKind, id: impl IntoIdentifier) -> Result<Value> {
        let (id, url) = self.prepare(kind, id)?;
        tracing::debug!("Sending GET request for {} '{}'", kind, id);
        self.http.get_json(url.as_str()).await
    }

    /// Fetch a resource and deserialize it into its record type
    ///
    /// ```ignore
    /// let pikachu: Pokemon = client.get("pikachu").await?;
    /// let berry = client.get::<Berry>(1).await?;
    /// ```
    pub async fn get<T: Resource>(&self, id: impl IntoIdentifier) -> Result<T> {
        let (id, url) = self.prepare(T::KIND, id)?;
        tracing::debug!("Sending GET request for {} '{}'", T::KIND, id);
        let value = self.http.get_json(url.as_str()).await?;

        tracing::debug!("Formatting {} data into record", T::KIND);
        decode(value, url.as_str())
    }

    pub async fn get_pokemon(&self, id: impl IntoIdentifier) -> Result<Pokemon> {
        self.get(id).await
    }

    /// Fetch the record a named reference points at
    pub async fn follow<T: Resource>(&self, reference: &NamedApiResource) -> Result<T> {
        let id = reference_id::<T>(&reference.url, reference.kind(), reference.id())?;
        self.get(id).await
    }

    /// Fetch the record an id-only reference points at
    pub async fn follow_api<T: Resource>(&self, reference: &ApiResource) -> Result<T> {
        let id = reference_id::<T>(&reference.url, reference.kind(), reference.id())?;
        self.get(id).await
    }

    /// Fetch one index page of a named resource type
    ///
    /// Only the requested page is fetched; `next` is never followed.
    pub async fn list(
        &self,
        kind: ResourceKind,
        offset: u32,
        limit: u32,
    ) -> Result<NamedApiResourceList> {
        let url = self.list_url(kind, offset, limit)?;
        let value = self.http.get_json(url.as_str()).await?;
        decode(value, url.as_str())
    }

    /// Fetch one index page of an id-only resource type
    pub async fn list_unnamed(
        &self,
        kind: ResourceKind,
        offset: u32,
        limit: u32,
    ) -> Result<ApiResourceList> {
        let url = self.list_url(kind, offset, limit)?;
        let value = self.http.get_json(url.as_str()).await?;
        decode(value, url.as_str())
    }

    /// Fetch the location areas where a creature can be encountered
    pub async fn pokemon_encounters(
        &self,
        id: impl IntoIdentifier,
    ) -> Result<Vec<LocationAreaEncounter>> {
        let (_, url) = self.prepare(ResourceKind::Pokemon, id)?;
        let url = url.join("encounters")?;
        let value = self.http.get_json(url.as_str()).await?;
        decode(value, url.as_str())
    }
}

/// Base URLs must end with a slash for `Url::join` to append to them
fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{}/", trimmed))?)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value, url: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}

fn reference_id<T: Resource>(
    url: &str,
    kind: Option<ResourceKind>,
    id: Option<u32>,
) -> Result<u32> {
    if kind != Some(T::KIND) {
        return Err(Error::ResourceMismatch {
            expected: T::KIND,
            found: url.to_string(),
        });
    }
    id.ok_or_else(|| Error::InvalidIdentifier {
        input: url.to_string(),
        reason: "reference url has no id",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Berry, Machine, PokemonSpecies};

    fn client() -> PokeClient {
        PokeClient::new().unwrap()
    }

    #[test]
    fn test_resource_url_by_id_and_name() {
        let client = client();

        let url = client
            .resource_url(ResourceKind::Pokemon, &Identifier::Id(25))
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25/");

        let url = client
            .resource_url(
                ResourceKind::PokemonSpecies,
                &Identifier::Name("mr-mime".to_string()),
            )
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon-species/mr-mime/");
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let client = PokeClient::with_base_url("http://localhost:8000/api/v2").unwrap();
        let url = client
            .resource_url(ResourceKind::Berry, &Identifier::Id(1))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/v2/berry/1/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            PokeClient::with_base_url("not a url"),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn test_list_url() {
        let url = client().list_url(ResourceKind::Item, 40, 20).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/item/?offset=40&limit=20");
    }

    #[test]
    fn test_prepare_rejects_names_for_id_only_kinds() {
        let client = client();
        assert!(matches!(
            client.prepare(ResourceKind::Machine, "tm01"),
            Err(Error::NameNotSupported { kind: ResourceKind::Machine })
        ));
        assert!(client.prepare(ResourceKind::Machine, 1).is_ok());
    }

    #[test]
    fn test_prepare_rejects_invalid_identifiers() {
        let client = client();
        assert!(matches!(
            client.prepare(ResourceKind::Pokemon, "Pikachu"),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(matches!(
            client.prepare(ResourceKind::Pokemon, -4),
            Err(Error::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_reference_id_checks_kind() {
        let url = "https://pokeapi.co/api/v2/pokemon-species/25/";
        assert_eq!(
            reference_id::<PokemonSpecies>(url, Some(ResourceKind::PokemonSpecies), Some(25)).unwrap(),
            25
        );
        assert!(matches!(
            reference_id::<Berry>(url, Some(ResourceKind::PokemonSpecies), Some(25)),
            Err(Error::ResourceMismatch { expected: ResourceKind::Berry, .. })
        ));
        assert!(matches!(
            reference_id::<Machine>("https://pokeapi.co/api/v2/machine/", Some(ResourceKind::Machine), None),
            Err(Error::InvalidIdentifier { .. })
        ));
    }
}
