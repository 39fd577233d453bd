use serde::{Serialize, Deserialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::ircore::common::{DocId, DEFAULT_CORPUS_DIR, DEFAULT_STOPWORD_FILE};
use crate::ircore::error::{Error, Result};

/// What the index builder does with a corpus file whose name is not a usable document id.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    Fail,
    Skip,
}

impl Default for MalformedPolicy {
    fn default() -> Self {
        MalformedPolicy::Fail
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Cfg {
    corpus_dir: PathBuf,
    stopword_file: PathBuf,
    on_malformed_document: MalformedPolicy,
    // inclusive; when absent the universe is the set of ids seen while indexing
    universe_range: Option<(DocId, DocId)>,
}

impl Default for Cfg {
    fn default() -> Self {
        Cfg {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            stopword_file: PathBuf::from(DEFAULT_STOPWORD_FILE),
            on_malformed_document: MalformedPolicy::default(),
            universe_range: None,
        }
    }
}

impl Cfg {
    pub fn new() -> Self {
        Cfg::default()
    }

    pub fn from_str(cfg_str: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if cfg_str.trim().is_empty() {
            return Ok(Cfg::new());
        }
        serde_yaml::from_str(cfg_str)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let cfg_str = fs::read_to_string(path)
            .map_err(|e| Error::configuration(path, e))?;
        let cfg = Self::from_str(&cfg_str)
            .map_err(|e| Error::configuration(path, e))?;
        cfg.check_universe_range()
            .map_err(|reason| Error::configuration(path, reason))?;
        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    pub fn with_corpus_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = dir.into();
        self
    }

    pub fn with_stopword_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.stopword_file = file.into();
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed_document = policy;
        self
    }

    pub fn with_universe_range(mut self, first: DocId, last: DocId) -> Self {
        self.universe_range = Some((first, last));
        self
    }

    pub fn get_corpus_dir(&self) -> &Path {
        &self.corpus_dir
    }

    pub fn get_stopword_file(&self) -> &Path {
        &self.stopword_file
    }

    pub fn get_malformed_policy(&self) -> MalformedPolicy {
        self.on_malformed_document
    }

    pub fn get_universe_range(&self) -> Option<(DocId, DocId)> {
        self.universe_range
    }

    /// A configured universe must be a non-empty range of valid document ids.
    pub fn check_universe_range(&self) -> std::result::Result<(), String> {
        match self.universe_range {
            Some((first, last)) if first > last =>
                Err(format!("universe_range [{}, {}] is empty", first, last)),
            Some((0, last)) =>
                Err(format!("universe_range [0, {}]: document id 0 is reserved", last)),
            _ => Ok(()),
        }
    }
}
