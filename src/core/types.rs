// src/core/types.rs
use std::collections::BTreeMap;

/// A single (word, tag) pair, e.g. `("dog", "NN")`.
/// Serializes as a two-element JSON array.
pub type TaggedToken = (String, String);

/// One sentence in word order.
pub type TaggedSentence = Vec<TaggedToken>;

/// An ordered list of tagged sentences.
/// Operations borrow it as `&[TaggedSentence]`.
pub type Corpus = Vec<TaggedSentence>;

/// Maps a position in the flattened word order of a corpus to the word found there.
/// Positions start at 0 and run across sentence boundaries.
pub type Id2Word = BTreeMap<usize, String>;
