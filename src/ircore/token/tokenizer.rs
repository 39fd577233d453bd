use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid regex"));
static WORD_OR_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[()]").expect("valid regex"));

/// Splits text on word boundaries. Words are maximal runs of Unicode
/// letters, digits and underscore; everything else is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Segmentator;

impl Segmentator {
    pub fn new() -> Self {
        Segmentator
    }

    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
    }

    pub fn parse_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WORD.find_iter(text).map(|m| m.as_str()).collect()
    }

    // same word boundaries, but parentheses survive as their own tokens
    pub fn parse_query_tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WORD_OR_PAREN.find_iter(text).map(|m| m.as_str()).collect()
    }
}
