// File: src/core/tagger.rs
use crate::core::types::TaggedSentence;

/// Anything that can assign tags to an ordered list of words.
///
/// Implementations are expected to return one pair per input word, in the
/// same order. Callers in this crate pass the output through unchecked.
pub trait Tagger {
    type Error;

    fn tag(&self, words: &[String]) -> Result<TaggedSentence, Self::Error>;
}

impl<F, E> Tagger for F
where
    F: Fn(&[String]) -> Result<TaggedSentence, E>,
{
    type Error = E;

    fn tag(&self, words: &[String]) -> Result<TaggedSentence, E> {
        self(words)
    }
}
