use crate::chunk::Chunk;
use crate::config::ChunkConfig;

/// Splits normalized text into overlapping word windows for semantic lookup.
///
/// A single-word message yields no windows: word-level lookup already covers
/// it, and a one-word window would only duplicate that query. Otherwise the
/// windows cover the full text with no gaps; consecutive windows share the
/// last `overlap_words` words of the previous window.
///
/// Windows are produced in input order. The function is total: a degenerate
/// config (zero step) stops after the first window instead of looping.
pub fn semantic_windows(text: &str, cfg: &ChunkConfig) -> Vec<Chunk> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 1 {
        return Vec::new();
    }

    let step = cfg.window_words.saturating_sub(cfg.overlap_words);
    let mut windows = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let end = (start + cfg.window_words).min(words.len());
        windows.push(Chunk::semantic(words[start..end].join(" ")));

        if end >= words.len() {
            break;
        }
        if step == 0 {
            break;
        }
        start += step;
    }

    windows
}
