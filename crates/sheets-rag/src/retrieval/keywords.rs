//! Frequency-ranked keyword extraction for mixed CJK and Latin text

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// CJK ideograph runs of 2 to 6, Latin letter runs of 3 or more
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{4e00}-\x{9fa5}]{2,6}|[A-Za-z]{3,}").expect("valid keyword token pattern")
});

/// Function words and generic nouns that never make useful topics
pub const STOP_WORDS: &[&str] = &[
    "我們", "你們", "他們", "這個", "這些", "目前", "以及", "可以", "如果",
    "因此", "另外", "透過", "系統", "方案", "產品", "規劃", "內容",
    "this", "that", "with", "from", "have", "will", "your",
];

static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Default number of keywords returned
pub const DEFAULT_TOP_N: usize = 6;

/// Keyword extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Top `top_n` tokens by frequency, ties in order of first appearance
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<String> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in TOKEN.find_iter(text) {
            let normalized = token.as_str().to_lowercase();
            if STOP_SET.contains(normalized.as_str()) {
                continue;
            }

            match positions.get(&normalized) {
                Some(&index) => counts[index].1 += 1,
                None => {
                    positions.insert(normalized.clone(), counts.len());
                    counts.push((normalized, 1));
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(top_n).map(|(word, _)| word).collect()
    }
}
