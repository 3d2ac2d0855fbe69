//! Clitic pronoun splitting.
use std::borrow::Cow;

/// Pronouns that attach to verbs with a hyphen (`dar-me`, `fazê-lo`, `diga-lhes`).
pub const PRONOUNS: [&str; 22] = [
    "me", "te", "o", "a", "no", "na", "lo", "la", "se", "lhe", "lho", "lha", "lhos", "lhas", "nos",
    "vos", "os", "as", "nas", "los", "las", "lhes",
];

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Checks whether `rest` starts with a pronoun ending at a word boundary other than a hyphen.
fn starts_with_clitic(rest: &str) -> bool {
    PRONOUNS.iter().any(|pronoun| {
        rest.starts_with(pronoun)
            && rest[pronoun.len()..]
                .chars()
                .next()
                .map_or(true, |c| !is_word(c) && c != '-')
    })
}

/// Detach clitic pronouns from their verb: `dar-me` becomes `dar- me`.
///
/// The hyphen stays on the stem, marking that a pronoun was split off.
/// Chained hyphens (`bem-te-vi`, `dá-se-lhe`) only have their last pronoun split.
pub fn split_clitics(text: &str) -> Cow<'_, str> {
    let mut out: Option<String> = None;
    let mut last = 0;
    let mut prev: Option<char> = None;

    for (i, c) in text.char_indices() {
        if c == '-' && prev.map_or(false, is_word) && starts_with_clitic(&text[i + 1..]) {
            let out = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
            out.push_str(&text[last..=i]);
            out.push(' ');
            last = i + 1;
        }
        prev = Some(c);
    }

    match out {
        Some(mut out) => {
            out.push_str(&text[last..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
