//! Image-generation request detection and subject extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalize;

/// Request prefixes, most specific first. Extraction uses the first entry
/// that matches, so longer phrasings must precede their shorter forms.
const IMAGE_PREFIXES: &[&str] = &[
    "generate an image of",
    "generate a picture of",
    "generate a photo of",
    "generate an image",
    "generate a picture",
    "generate image of",
    "generate image",
    "create an image of",
    "create a picture of",
    "create a photo of",
    "create an image",
    "create a picture",
    "create image of",
    "make me an image of",
    "make me a picture of",
    "make an image of",
    "make a picture of",
    "make an image",
    "make a picture",
    "give me an image of",
    "give me a picture of",
    "give me a photo of",
    "show me an image of",
    "show me a picture of",
    "show me a photo of",
    "draw me an",
    "draw me a",
    "draw me",
    "draw an",
    "draw a",
    "sketch an",
    "sketch a",
    "paint an",
    "paint a",
    "illustrate",
    "visualize",
    "visualise",
    "an image of",
    "a picture of",
    "a photo of",
    "image of",
    "picture of",
    "photo of",
];

static PREFIX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    IMAGE_PREFIXES
        .iter()
        .map(|phrase| {
            let words: Vec<String> = phrase.split(' ').map(regex::escape).collect();
            Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\W+")))
                .expect("image prefix pattern must compile")
        })
        .collect()
});

/// True when the text asks for an image to be produced.
pub fn is_image_request(text: &str) -> bool {
    let normalized = normalize(text);
    PREFIX_PATTERNS.iter().any(|re| re.is_match(&normalized))
}

/// Subject of an image request, taken from the original text after the
/// first matching prefix. Returns the text unchanged when no prefix matches
/// or nothing follows it.
pub fn extract_image_prompt(text: &str) -> String {
    for re in PREFIX_PATTERNS.iter() {
        if let Some(m) = re.find(text) {
            let subject = text[m.end()..]
                .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '-'))
                .trim_end();
            if subject.is_empty() {
                break;
            }
            return subject.to_string();
        }
    }
    text.to_string()
}
