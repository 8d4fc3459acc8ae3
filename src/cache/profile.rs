use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::constants::PROFILE_CACHE_TTL;
use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::encoding::{profile_cache_key, render_profile};
use crate::profile::Profile;

/// TTL-bounded `profile key -> vector` map in front of an [`EmbeddingProvider`].
///
/// Concurrent misses on one key share a single provider call. Failed calls are not
/// cached, so the next request retries.
pub struct ProfileEmbeddingCache {
    entries: Cache<String, Arc<Vec<f32>>>,
    provider: Arc<dyn EmbeddingProvider>,
    ttl: Duration,
}

impl ProfileEmbeddingCache {
    const DEFAULT_CAPACITY: u64 = 10_000;

    /// Creates a cache with the default 30 minute TTL.
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_ttl(provider, PROFILE_CACHE_TTL)
    }

    pub fn with_ttl(provider: Arc<dyn EmbeddingProvider>, ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(Self::DEFAULT_CAPACITY)
                .time_to_live(ttl)
                .build(),
            provider,
            ttl,
        }
    }

    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.provider
    }

    /// Returns the cached vector for `profile`, embedding its text on a miss.
    pub async fn get_or_compute(&self, profile: &Profile) -> Result<Vec<f32>, EmbeddingError> {
        let key = profile_cache_key(profile);
        if let Some(hit) = self.entries.get(&key).await {
            debug!(key = %key, "Profile embedding cache hit");
            return Ok(hit.as_ref().clone());
        }

        let provider = Arc::clone(&self.provider);
        let vector = self
            .entries
            .try_get_with(key.clone(), async move {
                let text = render_profile(profile);
                debug!(key = %key, "Profile embedding cache miss");
                provider.embed(&text).await.map(Arc::new)
            })
            .await
            .map_err(|e: Arc<EmbeddingError>| e.as_ref().clone())?;

        Ok(vector.as_ref().clone())
    }

    pub async fn contains(&self, profile: &Profile) -> bool {
        self.entries.get(&profile_cache_key(profile)).await.is_some()
    }

    pub async fn invalidate(&self, profile: &Profile) {
        self.entries.invalidate(&profile_cache_key(profile)).await;
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Number of live entries, after pending maintenance has run.
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl std::fmt::Debug for ProfileEmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileEmbeddingCache")
            .field("entries", &self.entries.entry_count())
            .field("model", &self.provider.model_id())
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[derive(Clone, Debug)]
/// Shared handle to a [`ProfileEmbeddingCache`].
pub struct ProfileEmbeddingCacheHandle {
    inner: Arc<ProfileEmbeddingCache>,
}

impl ProfileEmbeddingCacheHandle {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::from(ProfileEmbeddingCache::new(provider))
    }

    pub fn with_ttl(provider: Arc<dyn EmbeddingProvider>, ttl: Duration) -> Self {
        Self::from(ProfileEmbeddingCache::with_ttl(provider, ttl))
    }

    #[inline]
    pub async fn get_or_compute(&self, profile: &Profile) -> Result<Vec<f32>, EmbeddingError> {
        self.inner.get_or_compute(profile).await
    }

    #[inline]
    pub fn cache(&self) -> &ProfileEmbeddingCache {
        &self.inner
    }
}

impl From<ProfileEmbeddingCache> for ProfileEmbeddingCacheHandle {
    fn from(cache: ProfileEmbeddingCache) -> Self {
        Self {
            inner: Arc::new(cache),
        }
    }
}
