use crate::page::Page;
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const MAX_KEYWORDS: usize = 10;

const TITLE_WORDS: usize = 3;
const H1_WORDS: usize = 2;
const META_KEYWORDS: usize = 5;
const PATH_SEGMENTS: usize = 3;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "was", "one", "our",
        "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old", "see",
        "two", "way", "who", "boy", "did", "let", "put", "say", "she", "too", "use",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub struct KeywordExtractor;

impl KeywordExtractor {
    /// Collects candidate keywords from the title, first H1, meta keywords
    /// and URL path, then keeps the first `MAX_KEYWORDS` distinct ones.
    pub fn extract(page: &Page) -> Vec<String> {
        let mut candidates = Vec::new();

        if let Some(title) = page.title_text() {
            candidates.extend(Self::long_words(&title, TITLE_WORDS));
        }

        if let Some(h1) = page.first_h1_text() {
            candidates.extend(Self::long_words(&h1, H1_WORDS));
        }

        if let Some(meta) = page.meta_keywords().filter(|content| !content.is_empty()) {
            candidates.extend(
                meta.split(',')
                    .map(|entry| entry.trim().to_lowercase())
                    .take(META_KEYWORDS),
            );
        }

        if let Some(segments) = page.url().path_segments() {
            candidates.extend(
                segments
                    .filter(|segment| segment.chars().count() > 2)
                    .take(PATH_SEGMENTS)
                    .map(str::to_string),
            );
        }

        Self::dedup_and_filter(candidates)
    }

    fn long_words(text: &str, limit: usize) -> impl Iterator<Item = String> + '_ {
        text.split_whitespace()
            .map(str::to_lowercase)
            .filter(|word| word.chars().count() > 3)
            .take(limit)
    }

    /// Keeps first occurrences in order, dropping short words and stop words
    pub fn dedup_and_filter(candidates: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .filter(|word| word.chars().count() > 2 && !is_stop_word(word))
            .take(MAX_KEYWORDS)
            .collect()
    }
}
