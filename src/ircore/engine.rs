use std::path::Path;
use crate::ircore::cfg::{Cfg, MalformedPolicy};
use crate::ircore::common::DocId;
use crate::ircore::doc::Document;
use crate::ircore::doc::dir::DirIter;
use crate::ircore::error::{Error, Result};
use crate::ircore::index::{CorpusIndex, IndexStats};
use crate::ircore::query::{BooleanQuery, ProximityQuery, Query, QueryKind};
use crate::ircore::token::analyzer::{Analyzer, AnalyzerStats};
use crate::ircore::token::stopwords::StopwordSet;

/// Boolean and proximity retrieval over one corpus.
///
/// The indexes are built once, when the engine is created, and never change
/// afterwards, so a shared `&Engine` can serve queries from any number of threads.
#[derive(Debug)]
pub struct Engine {
    index: CorpusIndex,
    analyzer: Analyzer,
}

pub struct Stats {
    pub index: IndexStats,
    pub analyzer: AnalyzerStats,
}

impl Engine {
    /// Loads the stopword list and indexes every document of the configured corpus.
    pub fn new(cfg: &Cfg) -> Result<Self> {
        cfg.check_universe_range()
            .map_err(|reason| Error::configuration(cfg.get_corpus_dir(), reason))?;
        let stopwords = StopwordSet::load(cfg.get_stopword_file())?;
        let mut engine = Self::with_analyzer(Analyzer::new(stopwords), cfg.get_universe_range());
        let count = engine.build_index_from(cfg.get_corpus_dir(), cfg.get_malformed_policy())?;
        log::info!("{} documents indexed", count);
        Ok(engine)
    }

    /// Indexes documents already in memory. Two documents with the same id
    /// are a `MalformedCorpus` error.
    pub fn from_documents<I>(analyzer: Analyzer, docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut engine = Self::with_analyzer(analyzer, None);
        engine.index_documents(docs.into_iter().map(Ok))?;
        Ok(engine)
    }

    fn with_analyzer(analyzer: Analyzer, universe_range: Option<(DocId, DocId)>) -> Self {
        let index = match universe_range {
            Some((first, last)) => CorpusIndex::new().with_universe_range(first, last),
            None => CorpusIndex::new(),
        };
        Engine { index, analyzer }
    }

    fn build_index_from(&mut self, path: &Path, policy: MalformedPolicy) -> Result<usize> {
        log::info!("indexing {}...", path.display());
        let count = self.index_documents(DirIter::new(path, policy)?)?;
        if count == 0 {
            log::warn!("no documents found under {}", path.display());
        }
        Ok(count)
    }

    fn index_documents<I>(&mut self, docs: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<Document>>,
    {
        for doc in docs {
            self.add_document(&doc?)?;
        }
        Ok(self.doc_count())
    }

    fn add_document(&mut self, doc: &Document) -> Result<()> {
        let terms = self.analyzer.analyze(doc.get_content());
        log::trace!("{}: {} terms", doc.get_path().display(), terms.len());
        if !self.index.add_document(doc.get_doc_id(), &terms) {
            return Err(Error::malformed_corpus(doc.get_path(),
                format!("document id {} is used by more than one document", doc.get_doc_id())));
        }
        Ok(())
    }

    pub fn doc_count(&self) -> usize {
        self.index.get_document_count()
    }

    pub fn universe(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.get_universe()
    }

    pub fn get_index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn get_analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Routes the query to the proximity evaluator when it contains a `/`,
    /// to the boolean evaluator otherwise.
    pub fn search(&self, query_str: &str) -> Result<Vec<DocId>> {
        let query = Query::parse(query_str);
        match query.get_kind() {
            QueryKind::Proximity => Ok(self.evaluate_proximity(query.get_text())),
            QueryKind::Boolean => self.evaluate_boolean(query.get_text()),
        }
    }

    pub fn evaluate_boolean(&self, query_str: &str) -> Result<Vec<DocId>> {
        let query = BooleanQuery::parse(query_str, &self.analyzer)?;
        log::debug!("{:?}", query.get_postfix());
        query.evaluate(&self.index)
    }

    pub fn evaluate_proximity(&self, query_str: &str) -> Vec<DocId> {
        match ProximityQuery::parse(query_str, &self.analyzer) {
            Some(query) => {
                log::debug!("{:?}", query);
                query.evaluate(self.index.get_positional_index())
            },
            None => {
                log::debug!("'{}' is not a proximity query", query_str);
                vec![]
            }
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            index: self.index.stats(),
            analyzer: self.analyzer.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;

    fn sample_cfg() -> Cfg {
        Cfg::new()
            .with_corpus_dir("./sample_corpus/abstracts")
            .with_stopword_file("./sample_corpus/stopwords.txt")
    }

    fn sample_engine() -> Engine {
        Engine::new(&sample_cfg()).unwrap()
    }

    #[test]
    fn test_build_index() {
        let engine = sample_engine();
        assert_eq!(engine.doc_count(), 5);
        assert_eq!(engine.universe().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        let stats = engine.stats();
        assert_eq!(stats.index.document_count, 5);
        assert_eq!(stats.index.universe_size, 5);
        assert_eq!(stats.analyzer.stopword_count, 17);
        assert!(stats.index.term_count > 0);
    }

    #[test]
    fn test_positions_skip_stopwords() {
        let engine = sample_engine();
        let positional = engine.get_index().get_positional_index();
        // "Image restoration with deep learning. Deep networks ..."
        assert_eq!(positional.get_positions("deep", 1), Some(&vec![2, 4]));
        assert_eq!(positional.get_positions("learn", 1), Some(&vec![3]));
        // "Reinforcement learning agents learn policies ..."
        assert_eq!(positional.get_positions("learn", 4), Some(&vec![1, 3]));
    }

    #[test]
    fn test_boolean_queries() {
        let engine = sample_engine();
        assert_eq!(engine.evaluate_boolean("deep AND learning").unwrap(), vec![1, 2]);
        assert_eq!(engine.evaluate_boolean("image AND NOT deep").unwrap(), vec![3]);
        assert_eq!(engine.evaluate_boolean("networks").unwrap(), vec![1, 5]);
        assert_eq!(engine.evaluate_boolean("NOT learning").unwrap(), vec![3, 5]);
        assert_eq!(engine.evaluate_boolean("(survey OR language) AND NOT deep").unwrap(), vec![3]);
        assert_eq!(engine.evaluate_boolean("learning OR NOT learning").unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(engine.evaluate_boolean("the").unwrap(), Vec::<DocId>::new());
        assert_eq!(engine.evaluate_boolean("zebra").unwrap(), Vec::<DocId>::new());
    }

    #[test]
    fn test_latin1_document_indexed() {
        let engine = sample_engine();
        assert_eq!(engine.evaluate_boolean("Café").unwrap(), vec![5]);
        assert_eq!(engine.evaluate_boolean("café and résumé").unwrap(), vec![5]);
    }

    #[test]
    fn test_proximity_queries() {
        let engine = sample_engine();
        assert_eq!(engine.evaluate_proximity("deep learning /1"), vec![1, 2]);
        assert_eq!(engine.evaluate_proximity("deep learning /0"), Vec::<DocId>::new());
        assert_eq!(engine.evaluate_proximity("image restoration /1"), vec![1]);
        assert_eq!(engine.evaluate_proximity("learning learn /0"), vec![1, 2, 4]);
        assert_eq!(engine.evaluate_proximity("image networks /3"), vec![1]);
        assert_eq!(engine.evaluate_proximity("onlyoneword /3"), Vec::<DocId>::new());
    }

    #[test]
    fn test_search_dispatch() {
        let engine = sample_engine();
        assert_eq!(engine.search("deep learning /1").unwrap(), engine.evaluate_proximity("deep learning /1"));
        assert_eq!(engine.search("deep and learning").unwrap(), vec![1, 2]);
        assert_eq!(engine.search("deep learning /x").unwrap(), Vec::<DocId>::new());
        assert_eq!(engine.search("").unwrap(), Vec::<DocId>::new());
        assert!(matches!(engine.search("deep and"), Err(Error::MalformedQuery(_))));
    }

    #[test]
    fn test_two_document_scenario() {
        let analyzer = Analyzer::new(StopwordSet::new());
        let engine = Engine::from_documents(analyzer, vec![
            Document::new(1, "image restoration deep learning".to_string(), "1.txt"),
            Document::new(2, "deep learning models".to_string(), "2.txt"),
        ]).unwrap();
        assert_eq!(engine.evaluate_boolean("deep AND learning").unwrap(), vec![1, 2]);
        assert_eq!(engine.evaluate_boolean("image AND NOT deep").unwrap(), Vec::<DocId>::new());
        assert_eq!(engine.evaluate_proximity("deep learning /1"), vec![1, 2]);
        assert_eq!(engine.evaluate_proximity("deep learning /0"), Vec::<DocId>::new());
        assert_eq!(engine.evaluate_proximity("onlyoneword /3"), Vec::<DocId>::new());
    }

    #[test]
    fn test_empty_document_in_universe() {
        let analyzer = Analyzer::new(StopwordSet::from_words(vec!["the"]));
        let engine = Engine::from_documents(analyzer, vec![
            Document::new(1, "deep learning".to_string(), "1.txt"),
            Document::new(9, "The!".to_string(), "9.txt"),
        ]).unwrap();
        assert_eq!(engine.doc_count(), 2);
        assert_eq!(engine.evaluate_boolean("not deep").unwrap(), vec![9]);
    }

    #[test]
    fn test_universe_range() {
        let engine = Engine::new(&sample_cfg().with_universe_range(1, 8)).unwrap();
        assert_eq!(engine.doc_count(), 5);
        assert_eq!(engine.evaluate_boolean("not zebra").unwrap(), (1..=8).collect::<Vec<DocId>>());
        assert_eq!(engine.evaluate_boolean("not learning").unwrap(), vec![3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_repeated_doc_id_rejected() {
        let analyzer = Analyzer::new(StopwordSet::new());
        let res = Engine::from_documents(analyzer, vec![
            Document::new(1, "x x x alpha".to_string(), "1.txt"),
            Document::new(1, "alpha".to_string(), "1.old.txt"),
        ]);
        match res {
            Err(Error::MalformedCorpus { path, .. }) => assert_eq!(path, Path::new("1.old.txt")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_invalid_universe_range() {
        for (first, last) in [(8, 1), (0, 8)] {
            let cfg = sample_cfg().with_universe_range(first, last);
            assert!(matches!(Engine::new(&cfg), Err(Error::Configuration { .. })));
        }
    }

    #[test]
    fn test_wide_universe_range() {
        let engine = Engine::new(&sample_cfg().with_universe_range(1, DocId::MAX)).unwrap();
        assert_eq!(engine.stats().index.universe_size, DocId::MAX as usize);
        assert_eq!(engine.evaluate_boolean("deep and learning").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_unreadable_document_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "deep learning").unwrap();
        fs::write(dir.path().join("2.txt"), "deep networks").unwrap();
        let docs = DirIter::new(dir.path(), MalformedPolicy::Fail).unwrap();
        fs::remove_file(dir.path().join("1.txt")).unwrap();

        let mut engine = Engine::with_analyzer(Analyzer::new(StopwordSet::new()), None);
        assert_eq!(engine.index_documents(docs).unwrap(), 1);
        assert_eq!(engine.universe().collect::<Vec<_>>(), vec![2]);
        assert_eq!(engine.evaluate_boolean("deep").unwrap(), vec![2]);
    }

    #[test]
    fn test_concurrent_queries() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
        let engine = sample_engine();
        thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| {
                (engine.search("deep and learning").unwrap(), engine.search("deep learning /1").unwrap())
            })).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), (vec![1, 2], vec![1, 2]));
            }
        });
    }

    #[test]
    fn test_configuration_errors() {
        let cfg = sample_cfg().with_stopword_file("./sample_corpus/no-such-list.txt");
        assert!(matches!(Engine::new(&cfg), Err(Error::Configuration { .. })));
        let cfg = sample_cfg().with_corpus_dir("./sample_corpus/no-such-dir");
        assert!(matches!(Engine::new(&cfg), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_malformed_corpus() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.txt"), "deep learning").unwrap();
        fs::write(dir.path().join("notes.txt"), "deep notes").unwrap();
        let cfg = sample_cfg().with_corpus_dir(dir.path());
        assert!(matches!(Engine::new(&cfg), Err(Error::MalformedCorpus { .. })));

        let engine = Engine::new(&cfg.with_malformed_policy(MalformedPolicy::Skip)).unwrap();
        assert_eq!(engine.doc_count(), 1);
        assert_eq!(engine.evaluate_boolean("deep").unwrap(), vec![1]);
    }
}
