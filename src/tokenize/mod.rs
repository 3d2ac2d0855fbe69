/*! Sentence and word tokenization.

[Tokenizer::tokenize] turns a cleaned text into sentences of tokens:

1. (wiki only) the text is normalized, with typo correction (see [crate::normalize]),
1. clitic pronouns are split off their verbs (see [clitic]),
1. the text is split on line breaks, then each line into sentences (see [crate::segment]),
1. (wiki only) sentences holding markup residue are discarded,
1. sentences are scanned into tokens (see [scanner]) and short ones are discarded.
!*/
pub mod clitic;
pub mod scanner;

use log::debug;

pub(crate) use scanner::TokenRules;
pub use scanner::{Scanner, Token, TokenKind};

use crate::filtering::sentence::{Length, Residue};
use crate::filtering::Filter;
use crate::lexicon::Lexicon;
use crate::normalize::Normalizer;
use crate::segment::{SentenceSegmenter, UnicodeSentences};

/// Tokenized sentences of a text.
pub type Sentences = Vec<Vec<String>>;

pub struct Tokenizer<'a, S = UnicodeSentences> {
    normalizer: Normalizer<'a>,
    scanner: Scanner<'a>,
    segmenter: S,
    residue: Residue,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer using Unicode sentence boundaries.
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_segmenter(lexicon, UnicodeSentences)
    }
}

impl<'a, S> Tokenizer<'a, S>
where
    S: SentenceSegmenter,
{
    /// Create a tokenizer with a custom sentence segmenter.
    pub fn with_segmenter(lexicon: &'a Lexicon, segmenter: S) -> Self {
        Self {
            normalizer: Normalizer::new(lexicon),
            scanner: Scanner::new(lexicon),
            segmenter,
            residue: Residue::default(),
        }
    }

    /// Get a reference to the tokenizer's scanner.
    pub fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }

    /// Tokenize `text` into sentences of tokens.
    ///
    /// `wiki` enables normalization and the markup residue filter, and should be set for
    /// text coming out of the markup filter.
    /// Sentences with fewer than `min_sentence_size` tokens are dropped, and empty sentences
    /// are never returned.
    pub fn tokenize(&self, text: &str, wiki: bool, min_sentence_size: usize) -> Sentences {
        let length = Length::with_min_size(min_sentence_size);

        let normalized;
        let text = if wiki {
            normalized = self.normalizer.clean_text(text, true);
            normalized.as_str()
        } else {
            text
        };
        let text = clitic::split_clitics(text);

        let mut sentences = Vec::new();
        for line in text.lines() {
            for sentence in self.segmenter.segment(line) {
                if wiki && !self.residue.detect(sentence) {
                    debug!("discarding markup residue {:?}", sentence);
                    continue;
                }

                let tokens: Vec<&str> = self
                    .scanner
                    .scan(sentence)
                    .into_iter()
                    .map(|token| token.text)
                    .collect();

                if tokens.is_empty() || !length.detect(&tokens[..]) {
                    continue;
                }
                sentences.push(tokens.into_iter().map(String::from).collect());
            }
        }

        sentences
    }
}
