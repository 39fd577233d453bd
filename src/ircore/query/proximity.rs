use once_cell::sync::Lazy;
use regex::Regex;
use crate::ircore::common::{DocId, TermOffset};
use crate::ircore::index::PositionalIndex;
use crate::ircore::token::analyzer::Analyzer;

// anchored at the start only; anything after the distance is ignored
static PROXIMITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s+(\w+)\s*/([0-9]+)").expect("valid regex"));

/// `term1 term2 /k`: both terms in the same document, at most `k` tokens apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityQuery {
    first: String,
    second: String,
    distance: TermOffset,
}

impl ProximityQuery {
    /// None when the query does not have the `term1 term2 /k` shape.
    pub fn parse(query: &str, analyzer: &Analyzer) -> Option<Self> {
        let query_normalized = analyzer.get_segmentator().normalize(query);
        let caps = PROXIMITY.captures(&query_normalized)?;
        // more digits than fit in a u32 is wider than any document
        let distance = caps[3].parse::<TermOffset>().unwrap_or(TermOffset::MAX);
        Some(ProximityQuery {
            first: analyzer.stem(&caps[1]),
            second: analyzer.stem(&caps[2]),
            distance,
        })
    }

    pub fn get_terms(&self) -> (&str, &str) {
        (self.first.as_str(), self.second.as_str())
    }

    pub fn get_distance(&self) -> TermOffset {
        self.distance
    }

    /// Matching document ids, ascending.
    pub fn evaluate(&self, index: &PositionalIndex) -> Vec<DocId> {
        let (first_postings, second_postings) =
            match (index.get_postings(&self.first), index.get_postings(&self.second)) {
                (Some(p1), Some(p2)) => (p1, p2),
                _ => return vec![],
            };
        let mut docs: Vec<DocId> = first_postings.iter()
            .filter_map(|(doc, positions1)| {
                let positions2 = second_postings.get(doc)?;
                if Self::within(positions1, positions2, self.distance) {
                    Some(*doc)
                }else{
                    None
                }
            })
            .collect();
        docs.sort_unstable();
        docs
    }

    // merge walk over two ascending position lists; stops at the first pair
    // no more than `distance` apart
    fn within(positions1: &[TermOffset], positions2: &[TermOffset], distance: TermOffset) -> bool {
        let (mut i, mut j) = (0, 0);
        while i < positions1.len() && j < positions2.len() {
            let (p1, p2) = (positions1[i], positions2[j]);
            if p1.abs_diff(p2) <= distance {
                return true;
            }
            if p1 < p2 {
                i += 1;
            }else{
                j += 1;
            }
        }
        false
    }
}
