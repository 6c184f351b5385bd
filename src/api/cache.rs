//! Memoizing client
//!
//! Wraps [`PokeClient`] and remembers every successful response keyed by
//! `(resource type, identifier)` for the lifetime of the client. Failed
//! requests and bodies that fail to decode are never cached.

use super::client::{decode, PokeClient};
use crate::error::Result;
use crate::resource::{Identifier, IntoIdentifier, Resource, ResourceKind};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type CacheKey = (ResourceKind, Identifier);

/// PokeAPI client with an in-memory memo table
///
/// Lookups and inserts take the lock separately, so concurrent misses on the
/// same key each send a request. The last response to arrive is kept.
#[derive(Debug, Clone)]
pub struct CachedClient {
    inner: PokeClient,
    cache: Arc<RwLock<HashMap<CacheKey, Value>>>,
}

impl CachedClient {
    pub fn new(inner: PokeClient) -> Self {
        Self {
            inner,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// The wrapped, non-memoizing client
    pub fn inner(&self) -> &PokeClient {
        &self.inner
    }

    /// Fetch a resource as raw JSON, answering from the memo table when possible
    pub async fn get_json(&self, kind: ResourceKind, id: impl IntoIdentifier) -> Result<Value> {
        let (id, url) = self.inner.prepare(kind, id)?;
        let key = (kind, id);

        if let Some(value) = self.lookup(&key).await {
            return Ok(value);
        }

        let value = self.inner.http.get_json(url.as_str()).await?;
        self.cache.write().await.insert(key, value.clone());

        Ok(value)
    }

    /// Fetch a resource into its record type, answering from the memo table when possible
    ///
    /// Only bodies that decode into `T` are memoized. A memoized body that no
    /// longer decodes is evicted.
    pub async fn get<T: Resource>(&self, id: impl IntoIdentifier) -> Result<T> {
        let (id, url) = self.inner.prepare(T::KIND, id)?;
        let key = (T::KIND, id);

        if let Some(value) = self.lookup(&key).await {
            return match decode(value, url.as_str()) {
                Ok(record) => Ok(record),
                Err(err) => {
                    tracing::debug!("Evicting undecodable {} '{}'", T::KIND, key.1);
                    self.cache.write().await.remove(&key);
                    Err(err)
                }
            };
        }

        let value = self.inner.http.get_json(url.as_str()).await?;
        let record = decode(value.clone(), url.as_str())?;
        self.cache.write().await.insert(key, value);

        Ok(record)
    }

    async fn lookup(&self, key: &CacheKey) -> Option<Value> {
        let cache = self.cache.read().await;
        match cache.get(key) {
            Some(value) => {
                tracing::trace!("Cache hit for {} '{}'", key.0, key.1);
                Some(value.clone())
            }
            None => {
                tracing::debug!("Cache miss for {} '{}'", key.0, key.1);
                None
            }
        }
    }

    /// Whether a response is memoized for this key
    pub async fn contains(&self, kind: ResourceKind, id: &Identifier) -> bool {
        self.cache.read().await.contains_key(&(kind, id.clone()))
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.read().await.is_empty()
    }

    /// Drop every memoized response
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }
}

impl From<PokeClient> for CachedClient {
    fn from(inner: PokeClient) -> Self {
        Self::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_new_cache_is_empty() {
        let client = CachedClient::new(PokeClient::new().unwrap());
        assert!(client.is_empty().await);
        assert_eq!(client.len().await, 0);
        assert!(!client.contains(ResourceKind::Pokemon, &Identifier::Id(25)).await);
    }

    #[tokio::test]
    async fn test_invalid_identifier_is_not_cached() {
        let client = CachedClient::new(PokeClient::new().unwrap());

        let result = client.get_json(ResourceKind::Pokemon, "NOT VALID").await;
        assert!(matches!(result, Err(Error::InvalidIdentifier { .. })));
        assert!(client.is_empty().await);
    }
}
