//! Content seals for corruption detection.

use std::hash::Hasher;

use ragboost_core::types::Chunk;
use twox_hash::XxHash64;

/// Deterministic content hash over the exact chunk text, computed once at
/// creation time and stored immutably on the chunk.
pub fn seal(text: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(text.as_bytes());
    hasher.finish()
}

/// True iff the chunk's stored seal still matches its current text.
pub fn verify(chunk: &Chunk) -> bool {
    seal(&chunk.text) == chunk.seal
}
