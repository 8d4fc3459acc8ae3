//! BLAKE3 helpers for content fingerprints and feature hashing.

use blake3::Hasher;

/// Hex-encoded BLAKE3 digest of `text`.
///
/// Stored on every embedding record and compared on regeneration; any change to the
/// rendered entity text changes this value.
#[inline]
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Hashes `token` under a `salt`, so one token can feed independent hash functions.
#[inline]
pub fn hash_salted(salt: &str, token: &str) -> u64 {
    let mut hasher = Hasher::new();
    hasher.update(salt.as_bytes());
    hasher.update(b"|");
    hasher.update(token.as_bytes());

    truncate_to_u64(&hasher.finalize())
}

/// First 8 bytes of a BLAKE3 digest as a little-endian `u64`.
#[inline]
fn truncate_to_u64(hash: &blake3::Hash) -> u64 {
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}
