//! Internal link resolution.
use regex::{Captures, Regex};

/// Display text of a link match.
///
/// Matches with a single group are pipe-less links (`[[target]]`): the target is kept,
/// unless it points to a file, in which case nothing is kept.
/// Matches with two groups are piped links (`[[target|display]]`): the display text is kept.
pub fn resolve(caps: &Captures, file_namespace: &Regex) -> String {
    match (caps.get(1), caps.get(2)) {
        (_, Some(display)) => last_segment(display.as_str()).to_string(),
        (Some(target), None) if file_namespace.is_match(target.as_str()) => String::new(),
        (Some(target), None) => target.as_str().to_string(),
        (None, None) => String::new(),
    }
}

/// Text after the last pipe, which is what MediaWiki renders when several are present.
pub fn last_segment(display: &str) -> &str {
    display.rsplit('|').next().unwrap_or(display)
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{last_segment, resolve};

    fn file_namespace() -> Regex {
        Regex::new(r"(?i)^\s*:?\s*(?:arquivo|imagem?|ficheiro|file|image|media)\s*:").unwrap()
    }

    #[test]
    fn plain() {
        let re = Regex::new(r"\[\[([^\]\[|]*?)\]\]").unwrap();
        let caps = re.captures("[[Brasil]]").unwrap();
        assert_eq!(resolve(&caps, &file_namespace()), "Brasil");

        let caps = re.captures("[[Ficheiro:mapa.png]]").unwrap();
        assert_eq!(resolve(&caps, &file_namespace()), "");
    }

    #[test]
    fn piped() {
        let re = Regex::new(r"\[\[([^\]\[|]*)\|([^\]\[]*)\]\]").unwrap();
        let caps = re.captures("[[Brasil|o país]]").unwrap();
        assert_eq!(resolve(&caps, &file_namespace()), "o país");
    }

    #[test]
    fn last() {
        assert_eq!(last_segment("thumb|200px|Um rio"), "Um rio");
        assert_eq!(last_segment("texto"), "texto");
    }
}
