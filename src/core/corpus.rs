// File: src/core/corpus.rs
use crate::core::tagger::Tagger;
use crate::core::types::{Corpus, Id2Word, TaggedSentence};
use std::collections::BTreeSet;

/// The tags of every sentence, words dropped. Sentence order is kept.
pub fn tag_sequence(corpus: &[TaggedSentence]) -> Vec<Vec<String>> {
    corpus.iter().map(|sentence| untag_pos(sentence)).collect()
}

/// All tags of the corpus in one flat list.
/// Equal to concatenating the output of [`tag_sequence`].
pub fn tag_list(corpus: &[TaggedSentence]) -> Vec<String> {
    corpus
        .iter()
        .flat_map(|sentence| sentence.iter().map(|(_, tag)| tag.clone()))
        .collect()
}

/// The words of every sentence, tags dropped.
pub fn text_sequence(corpus: &[TaggedSentence]) -> Vec<Vec<String>> {
    corpus.iter().map(|sentence| untag(sentence)).collect()
}

/// Numbers every word of the corpus by its position in the flattened word order.
///
/// Sentence boundaries do not survive: the second sentence's first word gets
/// the index right after the first sentence's last word. A word that occurs
/// twice appears under both positions.
pub fn id2word(corpus: &[TaggedSentence]) -> Id2Word {
    text_sequence(corpus)
        .into_iter()
        .flatten()
        .enumerate()
        .collect()
}

/// The words of a single sentence, in order.
pub fn untag(sentence: &[(String, String)]) -> Vec<String> {
    sentence.iter().map(|(word, _)| word.clone()).collect()
}

/// The tags of a single sentence, in order.
pub fn untag_pos(sentence: &[(String, String)]) -> Vec<String> {
    sentence.iter().map(|(_, tag)| tag.clone()).collect()
}

/// Collects the distinct words of the corpus, sorted.
///
/// Comparison is case-sensitive and byte-wise on the UTF-8 text, which is
/// what `Ord for String` does. Uppercase ASCII therefore sorts before
/// lowercase (`"The" < "dog"`), and the result does not depend on locale or
/// on the order of the input sentences.
pub fn build_vocab(corpus: &[TaggedSentence]) -> Vec<String> {
    let mut vocab = BTreeSet::new();
    for sentence in corpus {
        for word in untag(sentence) {
            vocab.insert(word);
        }
    }
    tracing::debug!(vocab_size = vocab.len(), "built vocabulary");
    vocab.into_iter().collect()
}

/// Re-tags a corpus: strips each sentence down to its words and hands them to `tagger`.
///
/// The first error from the tagger stops the pass and is returned as-is.
/// The tagger's output is taken verbatim; its length and word order are not checked.
pub fn apply_tagger<T>(tagger: &T, corpus: &[TaggedSentence]) -> Result<Corpus, T::Error>
where
    T: Tagger + ?Sized,
{
    tracing::debug!(sentences = corpus.len(), "applying tagger");
    corpus
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let words = untag(sentence);
            let tagged = tagger.tag(&words)?;
            tracing::trace!(sentence = index, tokens = tagged.len(), "tagged sentence");
            Ok(tagged)
        })
        .collect()
}
