//! Compiled pattern set.
//!
//! Every regular expression used by the markup filter, the normalizer and the token
//! scanner is compiled once into a [Lexicon], which is then borrowed by each component.
use std::borrow::Cow;

use regex::{Regex, Replacer};

use crate::error::Error;
use crate::markup::MarkupRules;
use crate::normalize::NormalizeRules;
use crate::tokenize::TokenRules;

pub struct Lexicon {
    pub(crate) markup: MarkupRules,
    pub(crate) normalize: NormalizeRules,
    pub(crate) tokens: TokenRules,
}

impl Lexicon {
    /// Compile all patterns.
    ///
    /// Fails only if one of the built-in patterns is invalid.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            markup: MarkupRules::compile()?,
            normalize: NormalizeRules::compile()?,
            tokens: TokenRules::compile()?,
        })
    }
}

/// Replace all matches, returning [None] when nothing matched.
pub(crate) fn replace<R: Replacer>(re: &Regex, text: &str, rep: R) -> Option<String> {
    match re.replace_all(text, rep) {
        Cow::Owned(replaced) => Some(replaced),
        Cow::Borrowed(_) => None,
    }
}

/// Replace all matches, reusing `text` when nothing matched.
pub(crate) fn sub<R: Replacer>(re: &Regex, text: String, rep: R) -> String {
    replace(re, &text, rep).unwrap_or(text)
}
