//! Profile embedding cache.
//!
//! Maps a profile cache key to its embedding for a fixed time-to-live so repeated
//! rankings for the same profile skip the provider.

pub mod profile;


pub use profile::{ProfileEmbeddingCache, ProfileEmbeddingCacheHandle};
