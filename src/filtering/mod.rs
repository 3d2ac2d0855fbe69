/*! Filtering utilities

Filters operate on page titles, raw page texts, sentences and tokenized sentences.

Filters implement [filter::Filter]: they hold no state, and [filter::Filter::detect] returns `true`
when the provided item should be *kept*.

- [article::TitleFilter] and [article::TextFilter] discard non-article pages before any processing,
- [sentence::Residue] discards sentences where markup survived filtering,
- [sentence::Length] discards sentences that have too few tokens.
! */
pub mod article;
mod filter;
pub mod sentence;

pub use article::{TextFilter, TitleFilter};
pub use filter::Filter;
