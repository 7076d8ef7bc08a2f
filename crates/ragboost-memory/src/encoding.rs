//! Synthetic encoding accounting.
//!
//! The "compression" figures reported at load time are bookkeeping over a
//! state-count model; chunk text is stored verbatim and nothing here is
//! decodable. Keep this module pure and decoupled from storage.

/// State-space size for a compression level: the sum of n² for n in
/// 1..=level (level 15 gives 1240). Strictly increasing in `level`, which
/// is all the ratio report relies on.
pub fn state_count(level: u32) -> u32 {
    level * (level + 1) * (2 * level + 1) / 6
}

/// Synthetic compressed size of `chunks` chunks at `level`.
pub fn compressed_size(chunks: usize, level: u32) -> usize {
    chunks * (level as usize).pow(2)
}

/// Ratio between the original character count and the synthetic compressed
/// size; 0.0 when nothing was stored.
pub fn compression_ratio(original_chars: usize, chunks: usize, level: u32) -> f64 {
    let compressed = compressed_size(chunks, level);
    if compressed == 0 {
        return 0.0;
    }
    original_chars as f64 / compressed as f64
}
