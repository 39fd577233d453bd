use std::collections::HashMap;
use super::TermIndex;
use crate::ircore::common::{DocId, TermOffset};

pub type Positions = Vec<TermOffset>;

/// term -> document -> positions of the term in that document, ascending
#[derive(Debug, Default)]
pub struct PositionalIndex {
    postings_lists: HashMap<String, HashMap<DocId, Positions>>,
}

impl PositionalIndex {
    pub fn new() -> Self {
        PositionalIndex::default()
    }

    pub fn get_postings(&self, term: &str) -> Option<&HashMap<DocId, Positions>> {
        self.postings_lists.get(term)
    }

    pub fn get_positions(&self, term: &str, doc: DocId) -> Option<&Positions> {
        self.postings_lists.get(term)?.get(&doc)
    }

    // get: number of term occurences in whole collection
    pub fn get_term_occurences_num(&self, term: &str) -> usize {
        self.postings_lists.get(term)
            .map_or(0, |postings| postings.values().map(|p| p.len()).sum::<usize>())
    }

    pub fn term_occurences(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.postings_lists.iter()
            .map(|(term, postings)| (term.as_str(), postings.values().map(|p| p.len()).sum::<usize>()))
    }
}

impl TermIndex for PositionalIndex {
    // positions are only ever appended for the document being added, so
    // every list stays strictly increasing
    fn add_document(&mut self, doc_id: DocId, terms: &[String]) {
        for (seq, term) in terms.iter().enumerate() {
            let term_offset = seq as TermOffset;
            self.postings_lists.entry(term.clone())
                .or_default()
                .entry(doc_id)
                .or_insert_with(Vec::new)
                .push(term_offset);
        }
    }

    fn get_term_count(&self) -> usize {
        self.postings_lists.len()
    }

    fn contains_term(&self, term: &str) -> bool {
        self.postings_lists.contains_key(term)
    }
}
