//! Sentence-aligned chunking for speech synthesis.

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_CHUNK_LIMIT: usize = 4000;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern must compile"));

/// Sentences with their terminal punctuation; separating whitespace dropped.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        // Punctuation is one ASCII byte.
        out.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out.into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a sentence longer than `limit` characters, preferring whitespace.
fn split_oversize(sentence: &str, limit: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = sentence;
    while rest.chars().count() > limit {
        let cut = rest
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let split = if rest[cut..].starts_with(char::is_whitespace) {
            cut
        } else {
            rest[..cut]
                .rfind(char::is_whitespace)
                .filter(|&i| i > 0)
                .unwrap_or(cut)
        };
        pieces.push(rest[..split].trim_end());
        rest = rest[split..].trim_start();
    }
    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

/// Split `text` into chunks of at most `limit` characters, breaking at
/// sentence boundaries where possible. Sentences inside a chunk are joined
/// with a single space.
pub fn chunk_text(text: &str, limit: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let limit = limit.max(1);
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in sentences(text) {
        for piece in split_oversize(sentence, limit) {
            let len = piece.chars().count();
            if current_len == 0 {
                current.push_str(piece);
                current_len = len;
            } else if current_len + 1 + len <= limit {
                current.push(' ');
                current.push_str(piece);
                current_len += 1 + len;
            } else {
                chunks.push(std::mem::take(&mut current));
                current.push_str(piece);
                current_len = len;
            }
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text(target: usize) -> String {
        let mut text = String::new();
        let mut n = 0;
        while text.len() < target {
            if !text.is_empty() {
                text.push(' ');
            }
            n += 1;
            let end = ['.', '!', '?'][n % 3];
            text.push_str(&format!("This is sentence number {n} of a long spoken answer{end}"));
        }
        text
    }

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(chunk_text("  Hello there.  ", 4000), vec!["Hello there."]);
        assert!(chunk_text("   ", 4000).is_empty());
    }

    #[test]
    fn long_text_is_split_at_sentences() {
        let text = long_text(9000);
        assert!(text.chars().count() >= 9000);

        let chunks = chunk_text(&text, 4000);
        assert!(chunks.len() >= 3, "got {} chunks", chunks.len());
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 4000);
            assert!(
                chunk.ends_with(['.', '!', '?']),
                "chunk should end on a sentence: {:?}",
                &chunk[chunk.len().saturating_sub(20)..]
            );
        }
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn keeps_punctuation_with_sentence() {
        let chunks = chunk_text("One. Two! Three? Four.", 10);
        assert_eq!(chunks, vec!["One. Two!", "Three?", "Four."]);
    }

    #[test]
    fn oversize_sentence_breaks_at_whitespace() {
        let chunks = chunk_text("alpha beta gamma delta", 11);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta"]);
    }

    #[test]
    fn unbroken_run_is_hard_split() {
        let chunks = chunk_text(&"x".repeat(25), 10);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert_eq!(chunks.concat(), "x".repeat(25));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let text = "é".repeat(8);
        assert_eq!(chunk_text(&text, 8), vec![text.clone()]);
    }
}
