use std::fmt;
use rust_stemmers::{Algorithm, Stemmer};
use super::stopwords::StopwordSet;
use super::tokenizer::Segmentator;

/// Turns raw text into index terms: lowercase, split on word boundaries,
/// drop stopwords, stem.
pub struct Analyzer {
    seg: Segmentator,
    stopwords: StopwordSet,
    stemmer: Stemmer,
}

pub struct AnalyzerStats {
    pub stopword_count: usize,
}

impl Analyzer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Analyzer {
            seg: Segmentator::new(),
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn get_segmentator(&self) -> &Segmentator {
        &self.seg
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text_normalized = self.seg.normalize(text);
        self.seg.parse_tokens(&text_normalized)
            .into_iter()
            .filter(|token| !self.stopwords.contains(token))
            .map(|token| self.stem(token))
            .collect()
    }

    // query operands are stemmed but never checked against the stopword list
    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }

    pub fn stats(&self) -> AnalyzerStats {
        AnalyzerStats {
            stopword_count: self.stopwords.len(),
        }
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("stopwords", &self.stopwords.len())
            .field("stemmer", &"english")
            .finish()
    }
}
