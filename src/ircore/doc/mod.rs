pub mod dir;
pub mod text;

use std::path::{Path, PathBuf};
use crate::ircore::common::DocId;

#[derive(PartialEq, Debug, Clone)]
pub struct Document {
    doc_id: DocId,
    content: String,
    path: PathBuf,
}

impl Document {
    pub fn new(doc_id: DocId, content: String, path: impl Into<PathBuf>) -> Self {
        Document {
            doc_id,
            content,
            path: path.into(),
        }
    }
    pub fn get_doc_id(&self) -> DocId {
        self.doc_id
    }
    pub fn get_content(&self) -> &str {
        &self.content
    }
    pub fn get_path(&self) -> &Path {
        &self.path
    }
}
