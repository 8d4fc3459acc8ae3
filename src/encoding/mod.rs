//! Deterministic text renderings fed to the embedding provider.
//!
//! Profile and entity text share one vocabulary ([`IncomeBracket`], education and
//! category expansions) so both sides of a comparison use the same phrases.

pub mod entity;
pub mod income;
pub mod profile;
pub mod vocabulary;


pub use entity::{entity_content_hash, render_entity};
pub use income::IncomeBracket;
pub use profile::{EMPTY_PROFILE_TEXT, PROFILE_KEY_DELIMITER, profile_cache_key, render_profile};
