use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use super::Document;
use super::text::TextFileLoader;
use crate::ircore::cfg::MalformedPolicy;
use crate::ircore::common::{DocId, CORPUS_FILE_EXTENSION};
use crate::ircore::error::{Error, Result};

/// Walks the `*.txt` files directly under a corpus directory in path order.
///
/// Yields one `Ok(Document)` per readable file. Files that cannot be decoded
/// are logged and skipped. Files whose name is not a document id, or that
/// repeat an id already seen, are skipped with a warning under
/// `MalformedPolicy::Skip` and yielded as `Err` under `MalformedPolicy::Fail`.
pub struct DirIter {
    path_queue: VecDeque<PathBuf>,
    policy: MalformedPolicy,
    seen: HashSet<DocId>,
}

impl DirIter {
    pub fn new(path: &Path, policy: MalformedPolicy) -> Result<Self> {
        let entries = path.read_dir()
            .map_err(|e| Error::configuration(path, format!("cannot read corpus directory: {}", e)))?;
        let mut paths = vec![];
        for entry_result in entries {
            match entry_result {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if Self::ignore(&entry_path) {
                        log::debug!("ignore {}", entry_path.display());
                    }else{
                        paths.push(entry_path);
                    }
                },
                Err(e) => log::warn!("{}: {}", path.display(), e),
            }
        }
        paths.sort();
        log::debug!("{} corpus files found under {}", paths.len(), path.display());
        Ok(DirIter {
            path_queue: VecDeque::from(paths),
            policy,
            seen: HashSet::new(),
        })
    }

    fn ignore(path: &Path) -> bool {
        if let Some(filename) = path.file_name() {
            //by default, ignore hidden files on unix like platforms
            if filename.to_string_lossy().starts_with(".") {
                return true;
            }
        }
        match path.extension() {
            Some(ext) => ext != CORPUS_FILE_EXTENSION || !path.is_file(),
            None => true,
        }
    }

    /// Document id of a corpus file: the file name up to its first `.`,
    /// read as a positive decimal integer.
    pub fn doc_id_from_path(path: &Path) -> Result<DocId> {
        let filename = path.file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| Error::malformed_corpus(path, "file name is not valid unicode"))?;
        let stem = filename.split('.').next().unwrap_or_default();
        match stem.parse::<DocId>() {
            Ok(0) => Err(Error::malformed_corpus(path, "document id 0 is reserved")),
            Ok(doc_id) => Ok(doc_id),
            Err(e) => Err(Error::malformed_corpus(path,
                format!("'{}' is not a document id: {}", stem, e))),
        }
    }

    fn next_doc_id(&mut self, path: &Path) -> Result<DocId> {
        let doc_id = Self::doc_id_from_path(path)?;
        if !self.seen.insert(doc_id) {
            return Err(Error::malformed_corpus(path,
                format!("document id {} is used by more than one file", doc_id)));
        }
        Ok(doc_id)
    }
}

impl Iterator for DirIter {
    type Item = Result<Document>;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.path_queue.pop_front() {
            let doc_id = match self.next_doc_id(&path) {
                Ok(doc_id) => doc_id,
                Err(e) => match self.policy {
                    MalformedPolicy::Fail => return Some(Err(e)),
                    MalformedPolicy::Skip => {
                        log::warn!("skip {}", e);
                        continue;
                    }
                },
            };
            match Document::parse_file(doc_id, &path) {
                Ok(doc) => return Some(Ok(doc)),
                Err(e) => log::warn!("skip {}", e),
            }
        }
        None
    }
}
