//! Pure word-count chunking of raw documents.

use crate::error::{Error, Result};

/// Split `text` on whitespace and group the words into consecutive runs of
/// exactly `chunk_size`; the final run may be shorter. Order is preserved
/// and nothing is padded or dropped, so joining the output with single
/// spaces reproduces the source token sequence.
pub fn chunk_words(text: &str, chunk_size: usize) -> Result<Vec<String>> {
    if chunk_size == 0 {
        return Err(Error::InvalidInput("chunk_size must be positive".to_string()));
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(Error::InvalidInput("document text is empty".to_string()));
    }
    Ok(words.chunks(chunk_size).map(|group| group.join(" ")).collect())
}
