use std::collections::HashSet;
use std::fs;
use std::path::Path;
use crate::ircore::error::{Error, Result};

/// Lowercased words left out of the index.
#[derive(Debug, Default, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        StopwordSet::default()
    }

    /// One word per line; surrounding whitespace is trimmed and blank lines are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::configuration(path, e))?;
        let stopwords = Self::from_words(content.lines());
        log::info!("{} stopwords loaded from {}", stopwords.len(), path.display());
        Ok(stopwords)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        StopwordSet { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
