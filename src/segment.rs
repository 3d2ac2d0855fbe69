/*! Sentence segmentation.

Segmenters work on a single line: hard line breaks are always sentence boundaries and are
handled by the caller ([crate::tokenize::Tokenizer]).
!*/
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations after which a period does not end a sentence (lowercase, without the period).
const ABBREVIATIONS: [&str; 20] = [
    "sr", "sra", "srs", "sras", "dr", "dra", "drs", "prof", "profa", "av", "séc", "pág", "p",
    "pp", "vol", "nº", "ex", "cap", "fig", "sto",
];

/// Splits a line into sentences.
pub trait SentenceSegmenter {
    /// Sentences of `line`, in order, trimmed and non-empty.
    fn segment<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// Unicode sentence boundaries (UAX #29), realigned on Portuguese abbreviations
/// and initials so that `Sr. Silva` or `J. K. Rowling` stay in one sentence.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentences;

impl SentenceSegmenter for UnicodeSentences {
    fn segment<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        // start of the sentence being built, spanning merged pieces
        let mut start: Option<usize> = None;

        for (offset, piece) in line.split_sentence_bound_indices() {
            let begin = *start.get_or_insert(offset);
            if ends_with_abbreviation(piece) {
                continue;
            }
            push_trimmed(&mut sentences, &line[begin..offset + piece.len()]);
            start = None;
        }

        if let Some(begin) = start {
            push_trimmed(&mut sentences, &line[begin..]);
        }

        sentences
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

/// Checks whether a piece ends with a known abbreviation or a single capital initial.
fn ends_with_abbreviation(piece: &str) -> bool {
    let body = match piece.trim_end().strip_suffix('.') {
        Some(body) => body,
        None => return false,
    };

    let word = body
        .rsplit(|c: char| !(c.is_alphanumeric() || c == 'º'))
        .next()
        .unwrap_or("");

    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(initial), None) if initial.is_uppercase() => true,
        _ => ABBREVIATIONS.contains(&word.to_lowercase().as_str()),
    }
}
