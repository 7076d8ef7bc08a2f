use ragboost_core::error::Error;
use ragboost_core::types::Integrity;
use ragboost_memory::keywords::extract_keywords;
use ragboost_memory::{ChunkStore, InvertedIndex};

/// Three single-chunk loads so chunk ids line up with load order.
fn corpus() -> ChunkStore {
    let mut store = ChunkStore::new();
    store.load_document("auth token rotation policy", 10).expect("load");
    store.load_document("login screen layout draft", 10).expect("load");
    store.load_document("auth handshake sequence", 10).expect("load");
    store
}

#[test]
fn keywords_occur_literally_in_their_chunk() {
    let mut store = ChunkStore::new();
    store
        .load_document("The Token, and the (auth) handshake! Of course.", 20)
        .expect("load");

    let chunk = &store.chunks()[0];
    let normalized: Vec<String> = chunk
        .text
        .split_whitespace()
        .map(|t| t.trim_matches(&['.', ',', '!', '?', '(', ')'][..]).to_lowercase())
        .collect();
    for keyword in &chunk.keywords {
        assert!(
            normalized.contains(keyword),
            "keyword '{keyword}' not found in chunk text"
        );
    }
    // Stop words and short tokens are never keywords.
    assert!(!chunk.keywords.contains("the"));
    assert!(!chunk.keywords.contains("and"));
    assert!(!chunk.keywords.contains("of"));
}

#[test]
fn overlap_scoring_ranks_score_desc_then_id_asc() {
    let store = corpus();
    let ids = store.retrieve("auth token", 2).expect("retrieve");
    // Chunk 0 matches both query keywords, chunk 2 matches one,
    // chunk 1 matches none and is excluded.
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn retrieval_is_deterministic() {
    let store = corpus();
    let first = store.retrieve("auth token handshake", 8).expect("retrieve");
    for _ in 0..10 {
        assert_eq!(store.retrieve("auth token handshake", 8).expect("retrieve"), first);
    }
}

#[test]
fn zero_overlap_queries_return_nothing() {
    let store = corpus();
    let ids = store.retrieve("quarterly revenue forecast", 8).expect("retrieve");
    assert!(ids.is_empty(), "no fallback padding with unrelated chunks");
}

#[test]
fn retrieve_on_empty_corpus_is_an_error() {
    let store = ChunkStore::new();
    assert!(matches!(store.retrieve("anything", 8), Err(Error::EmptyCorpus(_))));
}

#[test]
fn indexing_the_same_chunk_twice_is_idempotent() {
    let store = corpus();
    let chunk = store.chunks()[0].clone();

    let mut index = InvertedIndex::new();
    index.index_chunk(&chunk);
    let before: Vec<_> = chunk
        .keywords
        .iter()
        .map(|k| index.postings(k).expect("posting list").clone())
        .collect();

    index.index_chunk(&chunk);
    let after: Vec<_> = chunk
        .keywords
        .iter()
        .map(|k| index.postings(k).expect("posting list").clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn seals_are_stable_across_reverification() {
    let store = corpus();
    for _ in 0..3 {
        assert_eq!(store.stats().integrity, Integrity::Intact);
    }
}

#[test]
fn loads_are_cumulative() {
    let mut store = ChunkStore::new();
    let first = store.load_document("alpha bravo charlie delta", 2).expect("load");
    assert_eq!(first.chunks, 2);

    let second = store.load_document("echo foxtrot", 2).expect("load");
    assert_eq!(second.chunks, 1);
    assert_eq!(store.len(), 3);

    // New chunk ids continue the sequence.
    assert_eq!(store.chunks()[2].id, 2);
    assert_eq!(store.chunks()[2].text, "echo foxtrot");
}

#[test]
fn context_assembly_follows_rank_order() {
    let store = corpus();
    let ids = store.retrieve("auth token", 2).expect("retrieve");
    let context = store.assemble(&ids);
    assert_eq!(context, "auth token rotation policy\n\nauth handshake sequence");
}

#[test]
fn assembly_is_byte_deterministic() {
    let store = corpus();
    assert_eq!(store.assemble(&[2, 0]), store.assemble(&[2, 0]));
    assert_eq!(store.assemble(&[]), "");
}

#[test]
fn top_k_caps_the_result_without_padding() {
    let store = corpus();
    // Both auth chunks match, but only the best one is returned.
    let ids = store.retrieve("auth", 1).expect("retrieve");
    assert_eq!(ids, vec![0]);

    // With a generous top_k only matching chunks come back.
    let ids = store.retrieve("auth", 10).expect("retrieve");
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn stats_report_totals_and_level_derived_figures() {
    let mut store = ChunkStore::with_compression_level(15).expect("store");
    store.load_document("auth token rotation policy across regions", 3).expect("load");

    let stats = store.stats();
    assert_eq!(stats.chunks, 2);
    assert_eq!(stats.bits, 2);
    assert_eq!(stats.compression_level, 15);
    assert_eq!(stats.states_per_bit, 1240);
    assert!(stats.indexed_keywords > 0);
    assert_eq!(stats.integrity.as_str(), "100%");
}

#[test]
fn compression_ratio_is_reported_per_load() {
    let mut store = ChunkStore::with_compression_level(15).expect("store");
    let text = "alpha bravo charlie delta echo foxtrot golf hotel";
    let report = store.load_document(text, 4).expect("load");

    // 2 chunks at level 15 -> synthetic size 450 characters.
    let expected = text.chars().count() as f64 / 450.0;
    assert!((report.compression_ratio - expected).abs() < 1e-9);
    assert_eq!(report.integrity, Integrity::Intact);
}

#[test]
fn query_normalization_matches_index_normalization() {
    let store = corpus();
    // Punctuation and case differences must not affect matching.
    let ids = store.retrieve("AUTH, token!", 2).expect("retrieve");
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn extract_keywords_deduplicates() {
    let keywords = extract_keywords("token token TOKEN token.");
    assert_eq!(keywords.len(), 1);
    assert!(keywords.contains("token"));
}

#[test]
fn zero_compression_level_is_rejected() {
    assert!(matches!(
        ChunkStore::with_compression_level(0),
        Err(Error::InvalidInput(_))
    ));
}
