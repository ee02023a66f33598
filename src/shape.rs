// File: src/shape.rs
use crate::core::types::{Corpus, TaggedSentence};
use crate::error::{CorpusError, Result};
use serde::de::DeserializeOwned;
use std::io::{BufReader, Read};

/// Decodes one sentence from a JSON array of `[word, tag]` pairs.
pub fn sentence_from_json(json: &str) -> Result<TaggedSentence> {
    decode(serde_json::from_str(json))
}

/// Decodes a corpus from a JSON array of sentences.
///
/// Every pair must be an array of exactly two strings. Anything else, e.g.
/// `["dog", "NN", "extra"]`, a bare string where a sentence is expected, or a
/// number as a tag, is a [`CorpusError::Shape`].
pub fn corpus_from_json(json: &str) -> Result<Corpus> {
    decode(serde_json::from_str(json))
}

/// Same as [`corpus_from_json`] for data that has already been parsed.
pub fn corpus_from_value(value: serde_json::Value) -> Result<Corpus> {
    decode(serde_json::from_value(value))
}

/// Reads one JSON corpus document from `reader`.
/// Read failures come back as [`CorpusError::Io`], bad data as [`CorpusError::Shape`].
pub fn corpus_from_reader<R: Read>(reader: R) -> Result<Corpus> {
    let reader = BufReader::new(reader);
    match serde_json::from_reader(reader) {
        Ok(corpus) => Ok(corpus),
        Err(e) if e.is_io() => Err(CorpusError::Io(e.into())),
        Err(e) => decode(Err(e)),
    }
}

/// Encodes a corpus as nested JSON arrays, the inverse of [`corpus_from_json`].
pub fn corpus_to_json(corpus: &[TaggedSentence]) -> Result<String> {
    Ok(serde_json::to_string(corpus)?)
}

fn decode<T: DeserializeOwned>(parsed: serde_json::Result<T>) -> Result<T> {
    parsed.map_err(|e| {
        tracing::debug!(line = e.line(), column = e.column(), "rejected corpus data: {e}");
        CorpusError::Shape(e)
    })
}
