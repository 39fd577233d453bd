pub mod common;
pub mod error;
pub mod cfg;
pub mod token;
pub mod doc;
pub mod index;
pub mod query;
pub mod engine;

pub use common::{DocId, TermOffset};
pub use error::{Error, Result};
