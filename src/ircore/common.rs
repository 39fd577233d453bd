pub type DocId = u32;
// zero-based offset into a document's filtered token stream
pub type TermOffset = u32;

pub const DEFAULT_CORPUS_DIR: &str = "Abstracts";
pub const DEFAULT_STOPWORD_FILE: &str = "Stopword-List.txt";
pub const CORPUS_FILE_EXTENSION: &str = "txt";
