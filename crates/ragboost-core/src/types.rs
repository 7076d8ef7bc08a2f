//! Domain types shared by the memory store and the booster facade.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Per-store sequence index. Ascending id doubles as the retrieval
/// tie-break, so insertion order is load-bearing.
pub type ChunkId = usize;

/// A fixed-size contiguous slice of a document's word sequence, the unit
/// of storage and retrieval.
///
/// - `id`: position in the store's append order
/// - `text`: the chunk text, stored verbatim
/// - `keywords`: normalized salient terms, each occurring literally in `text`
/// - `seal`: content hash computed once at creation time
/// - `state_count`: synthetic state-space size used only for reporting
///
/// Chunks are immutable after creation and owned exclusively by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
    pub keywords: BTreeSet<String>,
    pub seal: u64,
    pub state_count: u32,
}

/// Corpus-wide integrity verdict: `Intact` iff every chunk's seal matches
/// a freshly computed hash of its stored text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Integrity {
    #[serde(rename = "100%")]
    Intact,
    #[serde(rename = "<100%")]
    Degraded,
}

impl Integrity {
    pub fn as_str(self) -> &'static str {
        match self {
            Integrity::Intact => "100%",
            Integrity::Degraded => "<100%",
        }
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one `load_document` call added and how it is accounted.
///
/// `compression_ratio` is a bookkeeping figure over the synthetic encoding,
/// not a statement about stored bytes; chunk text is kept in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    pub chunks: usize,
    pub compression_ratio: f64,
    pub indexed_keywords: usize,
    pub integrity: Integrity,
}

/// On-demand corpus statistics.
///
/// `bits` counts one synthetic bit per stored chunk; `states_per_bit`
/// derives from the compression level alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    pub chunks: usize,
    pub bits: usize,
    pub indexed_keywords: usize,
    pub compression_level: u32,
    pub states_per_bit: u32,
    pub integrity: Integrity,
}
