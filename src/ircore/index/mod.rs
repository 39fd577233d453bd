pub mod inverted;
pub mod positional;

use std::cmp::Reverse;
use std::collections::BTreeSet;
use crate::ircore::common::DocId;
pub use inverted::InvertedIndex;
pub use positional::{PositionalIndex, Positions};

pub trait TermIndex {
    // terms are the document's normalized token stream, in order
    fn add_document(&mut self, doc_id: DocId, terms: &[String]);
    fn get_term_count(&self) -> usize;
    fn contains_term(&self, term: &str) -> bool;
}

/// Both indexes over one corpus, plus the universe of document ids that NOT
/// complements against.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    inverted: InvertedIndex,
    positional: PositionalIndex,
    // ids seen while indexing, independent of any configured universe
    indexed_docs: BTreeSet<DocId>,
    // inclusive; replaces indexed_docs as the universe when set
    universe_range: Option<(DocId, DocId)>,
    total_document_length: u64,
}

pub struct IndexStats {
    // total number of documents
    pub document_count: usize,
    // number of distinct terms
    pub term_count: usize,
    // total document length in tokens
    pub total_document_length: u64,
    pub universe_first: Option<DocId>,
    pub universe_last: Option<DocId>,
    pub universe_size: usize,
    // (term, occurrences), most frequent first
    pub term_freq: Vec<(String, usize)>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        CorpusIndex::default()
    }

    /// Replaces the derived universe with the inclusive range `first..=last`.
    /// The range is never materialized.
    pub fn with_universe_range(mut self, first: DocId, last: DocId) -> Self {
        self.universe_range = Some((first, last));
        self
    }

    /// Indexes one document. Returns false, leaving the index untouched, when
    /// `doc_id` is already indexed: merging two token streams under one id
    /// would break position ordering.
    pub fn add_document(&mut self, doc_id: DocId, terms: &[String]) -> bool {
        if !self.indexed_docs.insert(doc_id) {
            return false;
        }
        self.inverted.add_document(doc_id, terms);
        self.positional.add_document(doc_id, terms);
        self.total_document_length += terms.len() as u64;
        if self.indexed_docs.len() % 1000 == 0 {
            log::debug!("{}", self.indexed_docs.len());
        }
        true
    }

    pub fn get_inverted_index(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn get_positional_index(&self) -> &PositionalIndex {
        &self.positional
    }

    /// Ids NOT complements against, ascending.
    pub fn get_universe(&self) -> Box<dyn Iterator<Item = DocId> + '_> {
        match self.universe_range {
            Some((first, last)) => Box::new(first..=last),
            None => Box::new(self.indexed_docs.iter().copied()),
        }
    }

    pub fn universe_contains(&self, doc_id: DocId) -> bool {
        match self.universe_range {
            Some((first, last)) => (first..=last).contains(&doc_id),
            None => self.indexed_docs.contains(&doc_id),
        }
    }

    pub fn get_universe_size(&self) -> usize {
        match self.universe_range {
            Some((first, last)) if first <= last => (last - first) as usize + 1,
            Some(_) => 0,
            None => self.indexed_docs.len(),
        }
    }

    fn universe_bounds(&self) -> Option<(DocId, DocId)> {
        match self.universe_range {
            Some((first, last)) if first <= last => Some((first, last)),
            Some(_) => None,
            None => Some((*self.indexed_docs.iter().next()?, *self.indexed_docs.iter().next_back()?)),
        }
    }

    pub fn get_document_count(&self) -> usize {
        self.indexed_docs.len()
    }

    pub fn stats(&self) -> IndexStats {
        let mut term_freq: Vec<(String, usize)> = self.positional.term_occurences()
            .map(|(term, count)| (term.to_string(), count))
            .collect();
        term_freq.sort_by(|a, b| Reverse(a.1).cmp(&Reverse(b.1)).then_with(|| a.0.cmp(&b.0)));
        let bounds = self.universe_bounds();
        IndexStats {
            document_count: self.get_document_count(),
            term_count: self.inverted.get_term_count(),
            total_document_length: self.total_document_length,
            universe_first: bounds.map(|(first, _)| first),
            universe_last: bounds.map(|(_, last)| last),
            universe_size: self.get_universe_size(),
            term_freq,
        }
    }
}
