// src/slug.rs

//! Opaque public identifiers for recipes
//!
//! A slug is [`SLUG_BYTES`] random bytes encoded as unpadded URL-safe base64,
//! giving an 8 character handle that is safe in URLs and carries nothing
//! about the recipe it names.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Random bytes per slug
pub const SLUG_BYTES: usize = 6;

/// Encoded slug length for [`SLUG_BYTES`]
pub const SLUG_LEN: usize = 8;

/// Supplies candidate slugs to the store
///
/// Uniqueness is enforced by the database; a source only has to make
/// collisions unlikely.
pub trait SlugSource: Send {
    fn next_slug(&mut self) -> String;
}

/// Slugs drawn from a cryptographically secure generator
pub struct RandomSlugs {
    rng: StdRng,
}

impl RandomSlugs {
    /// Seed from the operating system's entropy source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for reproducible tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSlugs {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugSource for RandomSlugs {
    fn next_slug(&mut self) -> String {
        let mut bytes = [0u8; SLUG_BYTES];
        self.rng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

/// Check that a string has the shape of a generated slug
pub fn is_slug(s: &str) -> bool {
    s.len() == SLUG_LEN
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
