//! Page-level filtering.
//!
//! Pages that are not encyclopedic articles (help pages, categories, templates, portals,
//! disambiguation pages...) and redirects are discarded before their text is processed.
use super::Filter;

/// Namespaces whose pages are never articles. Compared in lowercase.
const EXCLUDED_NAMESPACES: [&str; 9] = [
    "wikipédia:",
    "wikipedia:",
    "anexo:",
    "ajuda:",
    "mediawiki:",
    "categoria:",
    "predefinição:",
    "portal:",
    "livro:",
];

/// Text prefixes of pages without useful prose. Compared in lowercase.
///
/// Day-of-year pages are almost only templates.
const EXCLUDED_PREFIXES: [&str; 4] = [
    "#redirecionamento",
    "#redirect",
    "{{desambiguação",
    "{{dia do ano",
];

/// Title filter.
/// Returns `false` for disambiguation pages and pages of a non-article namespace.
#[derive(Default)]
pub struct TitleFilter;

impl Filter<&str> for TitleFilter {
    fn detect(&self, title: &str) -> bool {
        let title = title.trim().to_lowercase();
        if title.contains("desambiguação") {
            return false;
        }
        !EXCLUDED_NAMESPACES
            .iter()
            .any(|namespace| title.starts_with(namespace))
    }
}

/// Text filter.
/// Returns `false` for redirects, disambiguation and day-of-year pages.
#[derive(Default)]
pub struct TextFilter;

impl Filter<&str> for TextFilter {
    fn detect(&self, text: &str) -> bool {
        // only the head of the page is relevant
        let head: String = text.trim_start().chars().take(32).collect();
        let head = head.to_lowercase();
        !EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| head.starts_with(prefix))
    }
}
