//! ragboost-booster
//!
//! Facade combining the chunk store with an LLM completion provider: load
//! documents into memory, then answer questions over retrieved context.
//! The store is the only state; the provider is a stateless collaborator.

use ragboost_core::error::{Error, Result};
use ragboost_core::traits::CompletionProvider;
use ragboost_core::types::{CorpusStats, LoadReport};
use ragboost_memory::store::{ChunkStore, DEFAULT_CHUNK_SIZE};

pub const DEFAULT_TOP_K: usize = 8;

pub struct RagBooster {
    store: ChunkStore,
    provider: Box<dyn CompletionProvider>,
}

impl RagBooster {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self {
            store: ChunkStore::new(),
            provider,
        }
    }

    /// Wrap an already configured store, e.g. one with a non-default
    /// compression level.
    pub fn with_store(store: ChunkStore, provider: Box<dyn CompletionProvider>) -> Self {
        Self { store, provider }
    }

    /// Load a document with the default 200-word chunk size. Repeated loads
    /// accumulate; earlier chunks are never replaced.
    pub fn load_document(&mut self, text: &str) -> Result<LoadReport> {
        self.load_document_with_chunk_size(text, DEFAULT_CHUNK_SIZE)
    }

    pub fn load_document_with_chunk_size(
        &mut self,
        text: &str,
        chunk_size: usize,
    ) -> Result<LoadReport> {
        self.store.load_document(text, chunk_size)
    }

    /// Answer with memory enabled and the default top-K.
    pub async fn ask(&self, question: &str) -> Result<String> {
        self.ask_with(question, true, DEFAULT_TOP_K).await
    }

    /// Answer `question`, optionally grounding it in retrieved context.
    ///
    /// With memory enabled the store must hold at least one chunk; a query
    /// with no keyword overlap still goes out, just with an empty context.
    /// Provider failures propagate unmodified; there is no retry here.
    pub async fn ask_with(&self, question: &str, use_memory: bool, top_k: usize) -> Result<String> {
        if !use_memory {
            return self.provider.complete(None, question).await;
        }
        if self.store.is_empty() {
            return Err(Error::NotInitialized(
                "no document loaded; call load_document first".to_string(),
            ));
        }
        let ids = self.store.retrieve(question, top_k)?;
        tracing::debug!(retrieved = ids.len(), top_k, "assembled context");
        let context = self.store.assemble(&ids);
        self.provider.complete(Some(&context), question).await
    }

    pub fn get_stats(&self) -> CorpusStats {
        self.store.stats()
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }
}
