use std::collections::{HashMap, HashSet};
use super::TermIndex;
use crate::ircore::common::DocId;

/// term -> documents containing it
#[derive(Debug, Default)]
pub struct InvertedIndex {
    dict: HashMap<String, HashSet<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    pub fn docs(&self, term: &str) -> Option<&HashSet<DocId>> {
        self.dict.get(term)
    }

    // get: the number of documents in the collection containing the term
    pub fn get_document_frequency(&self, term: &str) -> usize {
        self.dict.get(term).map_or(0, |docs| docs.len())
    }
}

impl TermIndex for InvertedIndex {
    fn add_document(&mut self, doc_id: DocId, terms: &[String]) {
        for term in terms {
            if let Some(docs) = self.dict.get_mut(term.as_str()) {
                docs.insert(doc_id);
            }else{
                self.dict.insert(term.clone(), HashSet::from([doc_id]));
            }
        }
    }

    fn get_term_count(&self) -> usize {
        self.dict.len()
    }

    fn contains_term(&self, term: &str) -> bool {
        self.dict.contains_key(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_inverted_index() {
        let mut idx = InvertedIndex::new();
        idx.add_document(1, &terms(&["imag", "restor", "deep", "learn"]));
        idx.add_document(2, &terms(&["deep", "learn", "model", "deep"]));
        assert_eq!(idx.get_term_count(), 5);
        assert_eq!(idx.docs("deep"), Some(&HashSet::from([1, 2])));
        assert_eq!(idx.docs("imag"), Some(&HashSet::from([1])));
        assert_eq!(idx.docs("zebra"), None);
        assert_eq!(idx.get_document_frequency("deep"), 2);
        assert_eq!(idx.get_document_frequency("model"), 1);
        assert_eq!(idx.get_document_frequency("zebra"), 0);
        assert!(idx.contains_term("restor"));
        assert!(!idx.contains_term("zebra"));
    }

    #[test]
    fn test_membership_matches_occurrence() {
        let docs = vec![
            (1, terms(&["a", "b", "c"])),
            (2, terms(&["b", "b"])),
            (3, terms(&[])),
        ];
        let mut idx = InvertedIndex::new();
        for (doc_id, t) in &docs {
            idx.add_document(*doc_id, t);
        }
        for term in ["a", "b", "c", "d"] {
            for (doc_id, t) in &docs {
                let indexed = idx.docs(term).map_or(false, |d| d.contains(doc_id));
                assert_eq!(indexed, t.iter().any(|x| x == term));
            }
        }
    }
}
