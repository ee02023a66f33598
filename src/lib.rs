// src/lib.rs

pub mod core;
pub mod error;
pub mod shape;

pub use crate::core::corpus::{
    apply_tagger, build_vocab, id2word, tag_list, tag_sequence, text_sequence, untag, untag_pos,
};
pub use crate::core::tagger::Tagger;
pub use crate::core::types::{Corpus, Id2Word, TaggedSentence, TaggedToken};
pub use crate::error::{CorpusError, Result};
