/*! Lexical scanner.

A sentence is scanned left to right. At each position the [TokenRules] are tried in order and
the first one matching (and whose guard accepts the match) produces the token.
Whitespace separates tokens and is never part of one.
!*/
use regex::Regex;

use crate::error::Error;
use crate::lexicon::Lexicon;
use crate::sentinel;

/// Token classes, in matching precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Runs of single letters followed by a dot (`E.U.A.`), or a capital initial (`J.`).
    Abbreviation,
    /// Numbers with thousands/decimal separators (`12.345,67`).
    Number,
    /// `12:30`
    Time,
    /// `12/03/2020`, `2020-03-12`
    Date,
    /// `Dr.`, `Sra.`, `Ph.D.`
    Title,
    /// `R$`, `US$`
    Currency,
    /// `#tag`, `@user`
    Mention,
    Word,
    /// `--`
    Hyphens,
    /// `...`
    Ellipsis,
    Sentinel,
    /// Any other single character.
    Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Additional check on a match, given the characters around it.
type Guard = fn(before: Option<char>, matched: &str, after: Option<char>) -> bool;

struct Rule {
    kind: TokenKind,
    /// anchored at the start of the rest of the sentence
    pattern: Regex,
    guard: Option<Guard>,
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_end(_: Option<char>, _: &str, after: Option<char>) -> bool {
    after.map_or(true, |c| !is_word(c))
}

fn after_space(before: Option<char>, _: &str, _: Option<char>) -> bool {
    before.map_or(true, char::is_whitespace)
}

fn not_sentinel(_: Option<char>, matched: &str, _: Option<char>) -> bool {
    !sentinel::is_sentinel(matched)
}

/// Ordered token rules, held by [Lexicon].
pub(crate) struct TokenRules {
    rules: Vec<Rule>,
}

impl TokenRules {
    pub(crate) fn compile() -> Result<Self, Error> {
        let sentinels = sentinel::ALL.join("|");
        let specs: [(TokenKind, String, Option<Guard>); 12] = [
            (
                TokenKind::Abbreviation,
                r"^(?:(?:[^\W\d_]\.){2,}|\p{Lu}\.)".to_string(),
                Some(word_end as Guard),
            ),
            (TokenKind::Number, r"^\d+(?:[.,]\d+)+".to_string(), None),
            (TokenKind::Time, r"^\d+(?::\d+)+".to_string(), None),
            (
                TokenKind::Date,
                r"^(?:\d+(?:/\d+)+|\d{1,4}-\d{1,2}-\d{1,4})".to_string(),
                None,
            ),
            (
                TokenKind::Title,
                r"(?i)^(?:[ds]ra?\.|m\.?sc\.?|ph\.?d\.?)".to_string(),
                Some(word_end as Guard),
            ),
            (TokenKind::Currency, r"^[^\W\d_]{1,2}\$".to_string(), None),
            (TokenKind::Mention, r"^[#@]\w+".to_string(), Some(after_space as Guard)),
            (
                TokenKind::Word,
                r"^\w+(?:[-'’]\w+)*-?".to_string(),
                Some(not_sentinel as Guard),
            ),
            (TokenKind::Hyphens, r"^-{2,}".to_string(), None),
            (TokenKind::Ellipsis, r"^\.{3,}".to_string(), None),
            (TokenKind::Sentinel, format!("^(?:{})", sentinels), None),
            (TokenKind::Symbol, r"^\S".to_string(), None),
        ];

        let rules = specs
            .into_iter()
            .map(|(kind, pattern, guard)| {
                Ok(Rule {
                    kind,
                    pattern: Regex::new(&pattern)?,
                    guard,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self { rules })
    }
}

/// Sentence to tokens.
pub struct Scanner<'a> {
    rules: &'a TokenRules,
}

impl<'a> Scanner<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            rules: &lexicon.tokens,
        }
    }

    /// Scan a sentence into tokens.
    ///
    /// Tokens never overlap, and concatenating them gives back the sentence without its whitespace.
    pub fn scan<'s>(&self, sentence: &'s str) -> Vec<Token<'s>> {
        let mut tokens = Vec::new();
        let mut before: Option<char> = None;
        let mut pos = 0;

        while let Some(c) = sentence[pos..].chars().next() {
            if c.is_whitespace() {
                before = Some(c);
                pos += c.len_utf8();
                continue;
            }

            let rest = &sentence[pos..];
            let token = self.match_at(before, rest).unwrap_or(Token {
                text: &rest[..c.len_utf8()],
                kind: TokenKind::Symbol,
            });

            pos += token.text.len();
            before = token.text.chars().next_back();
            tokens.push(token);
        }

        tokens
    }

    /// First rule matching at the start of `rest`.
    fn match_at<'s>(&self, before: Option<char>, rest: &'s str) -> Option<Token<'s>> {
        self.rules.rules.iter().find_map(|rule| {
            let m = rule.pattern.find(rest)?;
            if m.start() != 0 || m.is_empty() {
                return None;
            }

            let after = rest[m.end()..].chars().next();
            match rule.guard {
                Some(guard) if !guard(before, m.as_str(), after) => None,
                _ => Some(Token {
                    text: m.as_str(),
                    kind: rule.kind,
                }),
            }
        })
    }
}
