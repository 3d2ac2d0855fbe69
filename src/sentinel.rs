//! Placeholder tokens standing in for markup that cannot be rendered as prose.
//!
//! They keep the approximate shape of a sentence (its token count and position of
//! the removed element) so that later sentence-level filters can still judge it.

/// A collapsed template (`{{...}}`) or table (`{|...|}`).
pub const TEMPLATE: &str = "__TEMPLATE__";
/// An external URL.
pub const LINK: &str = "__LINK__";
/// A `<math>` block.
pub const MATH: &str = "__MATH__";
/// A multimedia namespace link.
pub const FILE: &str = "__FILE__";
/// An IPA pronunciation template, only emitted when enabled in [crate::markup::MarkupOptions].
pub const IPA: &str = "__IPA__";

/// Every sentinel, in no particular order.
pub const ALL: [&str; 5] = [TEMPLATE, LINK, MATH, FILE, IPA];

/// Checks whether `token` is exactly one of the sentinels.
pub fn is_sentinel(token: &str) -> bool {
    ALL.contains(&token)
}
