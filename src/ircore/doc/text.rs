use std::fs::{self, File};
use std::io::{self, Read, ErrorKind};
use std::path::Path;
use encoding_rs::WINDOWS_1252;
use encoding_rs_io::DecodeReaderBytesBuilder;
use super::Document;
use crate::ircore::common::DocId;
use crate::ircore::error::{Error, Result};

pub trait TextFileLoader {
    fn parse_file(doc_id: DocId, path: &Path) -> Result<Document>;
    fn read_to_string_non_utf8_encoding(path: &Path) -> io::Result<String>;
}

impl TextFileLoader for Document {
    // UTF-8 first, single-byte Latin-1 when the bytes are not valid UTF-8
    fn parse_file(doc_id: DocId, path: &Path) -> Result<Document> {
        match fs::read_to_string(path) {
            Ok(c) => Ok(Document::new(doc_id, c, path)),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log::debug!("{} is not valid UTF-8, retrying as Latin-1", path.display());
                match Self::read_to_string_non_utf8_encoding(path) {
                    Ok(c) => Ok(Document::new(doc_id, c, path)),
                    Err(e) => Err(Error::Decode { path: path.to_path_buf(), source: e }),
                }
            },
            Err(e) => Err(Error::Decode { path: path.to_path_buf(), source: e }),
        }
    }

    fn read_to_string_non_utf8_encoding(path: &Path) -> io::Result<String> {
        let source_file = File::open(path)?;
        let mut decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(WINDOWS_1252))
            .build(source_file);
        let mut dest = String::new();
        decoder.read_to_string(&mut dest)?;
        Ok(dest)
    }
}
