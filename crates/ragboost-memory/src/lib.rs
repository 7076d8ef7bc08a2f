//! ragboost-memory
//!
//! The in-process chunk store: keyword extraction and inverted index,
//! integrity seals, synthetic encoding accounting, and top-K retrieval.
//! See `store::ChunkStore` for the main entry point.

pub mod encoding;
pub mod integrity;
pub mod keywords;
pub mod store;

pub use keywords::InvertedIndex;
pub use store::ChunkStore;
