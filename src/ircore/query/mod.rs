pub mod boolean;
pub mod proximity;

pub use boolean::BooleanQuery;
pub use proximity::ProximityQuery;

// a raw query containing this character is a proximity query
pub const PROXIMITY_MARKER: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Boolean,
    Proximity,
}

/// A raw query routed to the evaluator that understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
    kind: QueryKind,
    text: &'a str,
}

impl<'a> Query<'a> {
    pub fn parse(text: &'a str) -> Self {
        let kind = if text.contains(PROXIMITY_MARKER) {
            QueryKind::Proximity
        }else{
            QueryKind::Boolean
        };
        Query { kind, text }
    }

    pub fn get_kind(&self) -> QueryKind {
        self.kind
    }

    pub fn get_text(&self) -> &'a str {
        self.text
    }
}
