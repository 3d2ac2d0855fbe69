//! sentence-level filtering
use super::Filter;
use crate::sentinel;

/// Markers of markup that the markup filter could not resolve.
const RESIDUE_MARKERS: [&str; 7] = ["{{", "}}", "[[", "]]", "{|", "|}", sentinel::TEMPLATE];

/// Residue filter.
/// Returns `false` if the sentence looks like a table row/header (starts with `|` or `!`)
/// or still holds template, link or table syntax.
///
/// Such sentences come from malformed source markup.
#[derive(Default)]
pub struct Residue;

impl Filter<&str> for Residue {
    fn detect(&self, sentence: &str) -> bool {
        let sentence = sentence.trim_start();
        if sentence.starts_with('!') || sentence.starts_with('|') {
            return false;
        }

        !RESIDUE_MARKERS
            .iter()
            .any(|marker| sentence.contains(marker))
    }
}

/// Simple length filter.
/// Returns `false` if provided sentence has less than [Length::min_size] tokens.
///
/// [Length::min_size] is 3 by default. A minimum size of 0 keeps everything.
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl<T> Filter<&[T]> for Length {
    fn detect(&self, tokens: &[T]) -> bool {
        tokens.len() >= self.min_size
    }
}

impl Default for Length {
    /// Default minimum length for sentences is 3 tokens
    fn default() -> Self {
        Length { min_size: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Length, Residue};

    #[test]
    fn length_default() {
        let valid = ["a", "b", "c"];
        let invalid = ["a", "b"];

        let f = Length::default();
        assert_eq!(f.min_size(), &3);
        assert!(f.detect(&valid[..]));
        assert!(!f.detect(&invalid[..]));
    }

    #[test]
    fn length_zero_keeps_all() {
        let empty: [&str; 0] = [];
        let f = Length::with_min_size(0);
        assert!(f.detect(&empty[..]));
    }

    #[test]
    fn residue_table_rows() {
        let f = Residue::default();
        assert!(!f.detect("| largura = 200"));
        assert!(!f.detect("  ! Ano !! Título"));
        assert!(f.detect("O rio nasce na serra."));
    }

    #[test]
    fn residue_markers() {
        let f = Residue::default();
        assert!(!f.detect("Ver __TEMPLATE__ abaixo."));
        assert!(!f.detect("Um [[link quebrado."));
        assert!(!f.detect("fim de tabela |}"));
        assert!(!f.detect("resto }} de predefinição"));
        assert!(f.detect("Veja __LINK__ para mais."));
    }
}
