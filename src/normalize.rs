/*! Text normalization.

[Normalizer::clean_text] unifies quotation marks, folds digits to `9` and, optionally, fixes a
handful of common punctuation typos. It is idempotent: cleaning already cleaned text is a no-op.
!*/
use regex::{Captures, Regex};

use crate::error::Error;
use crate::lexicon::{replace, sub, Lexicon};

/// Compiled normalization patterns, held by [Lexicon].
pub(crate) struct NormalizeRules {
    digit: Regex,
    double_punct: Regex,
    dash_prefix: Regex,
}

impl NormalizeRules {
    pub(crate) fn compile() -> Result<Self, Error> {
        Ok(Self {
            digit: Regex::new(r"\d")?,
            double_punct: Regex::new(r#",,,|"",|;;,|::,"#)?,
            dash_prefix: Regex::new(r" -([^\W\d_])")?,
        })
    }
}

pub struct Normalizer<'a> {
    rules: &'a NormalizeRules,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            rules: &lexicon.normalize,
        }
    }

    /// Unify quotes, expand ellipsis glyphs and fold digits.
    /// When `correct` is set, punctuation typos are fixed too.
    pub fn clean_text(&self, text: &str, correct: bool) -> String {
        let mut t = sub(&self.rules.digit, unify_quotes(text), "9");
        if correct {
            while let Some(corrected) = self.correct(&t) {
                t = corrected;
            }
        }
        t
    }

    /// Single correction pass, [None] if nothing was fixed.
    fn correct(&self, text: &str) -> Option<String> {
        let mut changed = false;
        let mut t = match collapse_double_dots(text) {
            Some(t) => {
                changed = true;
                t
            }
            None => text.to_string(),
        };

        // every alternative starts with the mark to keep, and marks are ASCII
        if let Some(fixed) = replace(&self.rules.double_punct, &t, |caps: &Captures| {
            caps[0][..1].to_string()
        }) {
            t = fixed;
            changed = true;
        }
        if let Some(fixed) = replace(&self.rules.dash_prefix, &t, " - $1") {
            t = fixed;
            changed = true;
        }

        if changed {
            Some(t)
        } else {
            None
        }
    }
}

/// Quotation glyphs that are always a quote.
fn is_quote(c: char) -> bool {
    matches!(c, '«' | '»' | '“' | '”' | '„' | '″')
}

/// Glyphs that are either an apostrophe or a quote, depending on their neighbours.
fn is_apostrophe_like(c: char) -> bool {
    matches!(c, '\'' | '‘' | '’' | '′' | '`')
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Map quotation glyphs to `"` and the ellipsis glyph to `...`.
///
/// Apostrophe-like glyphs become `"` only when one of their sides is not a word character
/// (or the edge of the text): `d'água` keeps its apostrophe, `'fado'` does not.
fn unify_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if is_quote(c) {
            out.push('"');
        } else if c == '…' {
            out.push_str("...");
        } else if is_apostrophe_like(c) {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            let bounded = |neighbour: Option<char>| neighbour.map_or(true, |n| !is_word(n));
            if bounded(before) || bounded(after) {
                out.push('"');
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Runs of exactly two dots become a single one. Longer runs are ellipses and are kept.
fn collapse_double_dots(text: &str) -> Option<String> {
    if !text.contains("..") {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut run = 0usize;

    let mut flush = |out: &mut String, run: usize| {
        if run == 2 {
            out.push('.');
            changed = true;
        } else {
            out.extend(std::iter::repeat('.').take(run));
        }
    };

    for c in text.chars() {
        if c == '.' {
            run += 1;
        } else {
            flush(&mut out, run);
            run = 0;
            out.push(c);
        }
    }
    flush(&mut out, run);

    if changed {
        Some(out)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{collapse_double_dots, unify_quotes, Normalizer};
    use crate::lexicon::Lexicon;

    fn clean(text: &str, correct: bool) -> String {
        let lexicon = Lexicon::new().unwrap();
        Normalizer::new(&lexicon).clean_text(text, correct)
    }

    #[test]
    fn quotes() {
        assert_eq!(unify_quotes("«olá» e “adeus”"), "\"olá\" e \"adeus\"");
        assert_eq!(unify_quotes("copo d'água"), "copo d'água");
        assert_eq!(unify_quotes("o ‘fado’ é"), "o \"fado\" é");
        assert_eq!(unify_quotes("rock’n’roll"), "rock’n’roll");
        assert_eq!(unify_quotes("'fado'"), "\"fado\"");
    }

    #[test]
    fn ellipsis() {
        assert_eq!(unify_quotes("e então…"), "e então...");
    }

    #[test]
    fn digits() {
        assert_eq!(clean("12.345,67", false), "99.999,99");
        assert_eq!(clean("em 1500, ao meio-dia", false), "em 9999, ao meio-dia");
    }

    #[test]
    fn double_dots() {
        assert_eq!(collapse_double_dots("fim.. e"), Some("fim. e".to_string()));
        assert_eq!(collapse_double_dots("fim... e"), None);
        assert_eq!(collapse_double_dots("a.b"), None);
        assert_eq!(clean("fim..", true), "fim.");
        assert_eq!(clean("fim..", false), "fim..");
    }

    #[test]
    fn double_punctuation() {
        assert_eq!(clean("a,,, b;;, c::, d", true), "a, b; c: d");
        assert_eq!(clean("diz '', ok", true), "diz \", ok");
        assert_eq!(clean("a,,,,, b", true), "a, b");
    }

    #[test]
    fn dash_prefix() {
        assert_eq!(clean("e -disse ele", true), "e - disse ele");
        assert_eq!(clean("e -9 graus", true), "e -9 graus");
        assert_eq!(clean("guarda-chuva", true), "guarda-chuva");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "«Olá», disse o ‘Sr. Silva’ em 1987.. e -depois… ,,, fim",
            "copo d'água '' , rock’n’roll",
            "a''b ``c'' 12:30",
        ];
        for correct in [false, true] {
            for sample in samples.iter() {
                let once = clean(sample, correct);
                assert_eq!(clean(&once, correct), once, "{:?}", sample);
            }
        }
    }
}
