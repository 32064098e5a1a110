//! Turning raw comment text into a ranked, sized vocabulary.

use std::sync::OnceLock;

use counter::Counter;
use regex::Regex;

/// Pixel size of the least frequent word that still gets drawn.
pub(super) const MIN_WORD_PX: f32 = 10.0;

/// Only the most frequent words make it into the cloud.
pub(super) const MAX_WORDS: usize = 120;

/// Filler words that would otherwise dominate any comment section.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "but", "by", "can",
    "could", "did", "do", "does", "don't", "for", "from", "had", "has", "have",
    "he", "her", "here", "him", "his", "how", "i", "i'm", "if", "in", "into",
    "is", "it", "it's", "its", "just", "like", "me", "more", "most", "my",
    "no", "not", "of", "on", "one", "only", "or", "other", "our", "out",
    "over", "she", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "too", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "who",
    "why", "will", "with", "would", "you", "your",
];

/// A word ranked by frequency, with the pixel size it will be drawn at.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedWord {
    pub text: String,
    pub size: f32,
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Alphabetic runs, allowing interior apostrophes ("don't").
    PATTERN.get_or_init(|| {
        Regex::new(r"\p{Alphabetic}(?:['\p{Alphabetic}]*\p{Alphabetic})?")
            .expect("word pattern should compile")
    })
}

/// Splits text into lowercased words with stopwords removed. Order and
/// repetition are preserved so the caller can count frequencies.
pub(super) fn tokenize(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(text)
        .map(|word| word.as_str().to_lowercase())
        .filter(|word| !STOPWORDS.contains(&word.as_str()))
        .collect()
}

/// Counts tokens and assigns each distinct word a size between
/// [`MIN_WORD_PX`] and `max_size`, scaled by relative frequency.
///
/// Square-root easing keeps mid-frequency words legible instead of letting
/// the top word dwarf everything else. Ties order by word, so the ranking
/// is deterministic.
pub(super) fn weigh(tokens: Vec<String>, max_size: u32) -> Vec<WeightedWord> {
    let counts: Counter<String> = tokens.into_iter().collect();
    let ranked = counts.most_common_ordered();

    let top = match ranked.first() {
        Some((_, count)) => *count as f32,
        None => return Vec::new(),
    };
    let span = (max_size as f32 - MIN_WORD_PX).max(0.0);

    ranked
        .into_iter()
        .take(MAX_WORDS)
        .map(|(text, count)| {
            let scale = (count as f32 / top).sqrt();
            WeightedWord {
                text,
                size: MIN_WORD_PX + span * scale,
            }
        })
        .collect()
}
