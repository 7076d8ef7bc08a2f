//! The append-only chunk corpus with its keyword index.
//!
//! Loads mutate through `&mut self` and queries read through `&self`, so a
//! single store never interleaves a load with reads in-process. Callers
//! sharing a store across threads wrap it in a read-write lock; appending
//! chunks is the only mutation.

use std::collections::HashMap;

use ragboost_core::chunker::chunk_words;
use ragboost_core::error::{Error, Result};
use ragboost_core::types::{Chunk, ChunkId, CorpusStats, Integrity, LoadReport};

use crate::encoding;
use crate::integrity;
use crate::keywords::{self, InvertedIndex};

pub const DEFAULT_CHUNK_SIZE: usize = 200;
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 15;

/// Delimiter between chunk texts in an assembled context.
const CONTEXT_DELIMITER: &str = "\n\n";

#[derive(Debug)]
pub struct ChunkStore {
    chunks: Vec<Chunk>,
    index: InvertedIndex,
    compression_level: u32,
}

impl Default for ChunkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkStore {
    pub fn new() -> Self {
        Self {
            chunks: Vec::new(),
            index: InvertedIndex::new(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// A store with a non-default compression level. The level only shifts
    /// the reported ratio and state counts, never the stored text.
    pub fn with_compression_level(level: u32) -> Result<Self> {
        if level == 0 {
            return Err(Error::InvalidInput(
                "compression_level must be positive".to_string(),
            ));
        }
        Ok(Self {
            chunks: Vec::new(),
            index: InvertedIndex::new(),
            compression_level: level,
        })
    }

    /// Chunk `text`, seal and index every chunk, and append to the corpus.
    /// Cumulative: chunks from earlier loads are never replaced.
    pub fn load_document(&mut self, text: &str, chunk_size: usize) -> Result<LoadReport> {
        let pieces = chunk_words(text, chunk_size)?;
        let added = pieces.len();
        for piece in pieces {
            let chunk = Chunk {
                id: self.chunks.len(),
                keywords: keywords::extract_keywords(&piece),
                seal: integrity::seal(&piece),
                state_count: encoding::state_count(self.compression_level),
                text: piece,
            };
            self.index.index_chunk(&chunk);
            self.chunks.push(chunk);
        }
        tracing::debug!(added, total = self.chunks.len(), "loaded document");
        Ok(LoadReport {
            chunks: added,
            compression_ratio: encoding::compression_ratio(
                text.chars().count(),
                added,
                self.compression_level,
            ),
            indexed_keywords: self.index.keyword_count(),
            integrity: self.integrity_status(),
        })
    }

    /// Rank chunk ids by distinct-query-keyword overlap, descending, with
    /// ascending id breaking ties. Chunks with no overlap never appear, so
    /// a query foreign to the corpus retrieves an empty list rather than
    /// padding with unrelated chunks.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<ChunkId>> {
        if self.chunks.is_empty() {
            return Err(Error::EmptyCorpus("no chunks loaded".to_string()));
        }
        if top_k == 0 {
            return Err(Error::InvalidInput("top_k must be positive".to_string()));
        }
        let mut scores: HashMap<ChunkId, usize> = HashMap::new();
        for keyword in keywords::extract_keywords(query) {
            if let Some(ids) = self.index.postings(&keyword) {
                for id in ids {
                    *scores.entry(*id).or_insert(0) += 1;
                }
            }
        }
        let mut ranked: Vec<(ChunkId, usize)> = scores.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(top_k);
        Ok(ranked.into_iter().map(|(id, _)| id).collect())
    }

    /// Concatenate chunk texts in the given (rank) order. Byte-identical
    /// output for identical id sequences.
    pub fn assemble(&self, ids: &[ChunkId]) -> String {
        ids.iter()
            .filter_map(|id| self.chunks.get(*id))
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_DELIMITER)
    }

    /// Recompute corpus statistics, re-verifying every chunk's seal.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            chunks: self.chunks.len(),
            bits: self.chunks.len(),
            indexed_keywords: self.index.keyword_count(),
            compression_level: self.compression_level,
            states_per_bit: encoding::state_count(self.compression_level),
            integrity: self.integrity_status(),
        }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Degraded as soon as any chunk fails verification; a corrupted chunk
    /// is reported, not fatal, so the rest of the corpus stays queryable.
    fn integrity_status(&self) -> Integrity {
        let mut status = Integrity::Intact;
        for chunk in &self.chunks {
            if !integrity::verify(chunk) {
                tracing::warn!(chunk = chunk.id, "seal mismatch detected");
                status = Integrity::Degraded;
            }
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupted_chunk_degrades_stats_but_not_retrieval() {
        let mut store = ChunkStore::new();
        store
            .load_document("auth tokens expire after sixty minutes", 4)
            .expect("load");
        assert_eq!(store.stats().integrity, Integrity::Intact);

        // Simulate corruption of the stored text behind the seal's back.
        store.chunks[0].text = "auth tokens expire never".to_string();

        assert_eq!(store.stats().integrity, Integrity::Degraded);
        // The corpus is still queryable.
        let ids = store.retrieve("auth tokens", 4).expect("retrieve");
        assert!(!ids.is_empty());
    }
}
