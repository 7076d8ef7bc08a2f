//! Keyword extraction and the inverted index.
//!
//! The same normalization path serves indexing and queries, so a store
//! instance always applies one consistent rule set.

use std::collections::{BTreeSet, HashMap};

use ragboost_core::types::{Chunk, ChunkId};

/// Punctuation stripped from token edges before any other test.
const STRIP_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Tokens shorter than this never become keywords.
const MIN_KEYWORD_LEN: usize = 3;

/// Common function words excluded from the index.
const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "been", "being", "but", "can", "did",
    "does", "for", "from", "had", "has", "have", "her", "him", "his", "how", "into", "its", "just",
    "more", "most", "not", "one", "only", "our", "out", "over", "own", "same", "she", "some",
    "such", "than", "that", "the", "their", "them", "then", "there", "they", "this", "too", "was",
    "were", "what", "when", "where", "which", "who", "why", "will", "with", "would", "you", "your",
];

/// Lowercase a raw whitespace token and strip surrounding punctuation.
fn normalize(token: &str) -> String {
    token.trim_matches(STRIP_CHARS).to_lowercase()
}

/// Deduplicated salient terms of `text`. Every returned keyword occurs
/// literally (post-normalization) in the input; the inverse does not hold.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(normalize)
        .filter(|t| t.len() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

/// Posting lists: keyword -> set of chunk ids containing it.
///
/// A pure projection of the chunk keyword sets, never mutated on its own.
/// Lists only grow within a session; there is no deletion operation.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, BTreeSet<ChunkId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `chunk.id` to the posting list of every keyword in the chunk,
    /// creating lists as needed. Idempotent: lists are sets, so re-indexing
    /// an already indexed chunk changes nothing.
    pub fn index_chunk(&mut self, chunk: &Chunk) {
        for keyword in &chunk.keywords {
            self.postings.entry(keyword.clone()).or_default().insert(chunk.id);
        }
    }

    pub fn postings(&self, keyword: &str) -> Option<&BTreeSet<ChunkId>> {
        self.postings.get(keyword)
    }

    /// Number of distinct indexed keywords.
    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }
}
