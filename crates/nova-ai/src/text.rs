//! Text canonicalization for pattern matching.

/// Lowercase, drop quotes, turn other punctuation into spaces, and collapse
/// whitespace.
///
/// Letters outside ASCII are kept only in the Latin-1 Supplement and Latin
/// Extended-A/B blocks. The result is idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter_map(|c| {
            if is_quote(c) {
                None
            } else if is_word_char(c) || c.is_whitespace() {
                Some(c)
            } else {
                Some(' ')
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '`')
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{024F}').contains(&c)
}

/// A user utterance prepared for keyword lookups.
///
/// Plain word terms match whole words of the normalized text; terms that
/// carry symbols (`c#`, `c++`, `node.js`) match the lowercased raw text,
/// bounded on both sides by a non-word character or the text edge.
#[derive(Debug, Clone)]
pub struct TextView {
    lower: String,
    normalized: String,
    padded: String,
}

impl TextView {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        Self {
            lower: raw.to_lowercase(),
            padded: format!(" {normalized} "),
            normalized,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn word_count(&self) -> usize {
        self.normalized.split_whitespace().count()
    }

    pub fn has_question_mark(&self) -> bool {
        self.lower.contains('?')
    }

    pub fn starts_with_word(&self, word: &str) -> bool {
        self.normalized.split_whitespace().next() == Some(word)
    }

    pub fn mentions(&self, term: &str) -> bool {
        if term.chars().all(|c| is_word_char(c) || c == ' ') {
            self.padded.contains(&format!(" {term} "))
        } else {
            contains_bounded(&self.lower, term)
        }
    }

    pub fn mentions_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.mentions(t))
    }
}

/// `term` occurs in `haystack` with no word character directly before or
/// after it.
fn contains_bounded(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, _)| {
        let end = start + term.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}
