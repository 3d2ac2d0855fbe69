//! Section handling: dropping whole sections by title, and stripping heading lines.
use regex::{Captures, Regex};

/// Remove every section whose heading matches `heading`, from the heading up to the next
/// heading of the same or a higher level (or the end of the text). The next heading is kept.
///
/// `heading` must capture the opening `=` run as group 1 and the closing one as group 2.
/// Headings whose runs differ in length are not considered.
pub fn remove_named(text: &str, heading: &Regex) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(caps) = heading.captures_at(text, pos) {
        let (start, end) = match caps.get(0) {
            Some(m) => (m.start(), m.end()),
            None => break,
        };
        let level = caps[1].len();

        if caps[2].len() != level {
            // skip past the first '=' and look again
            out.push_str(&text[pos..start + 1]);
            pos = start + 1;
            continue;
        }

        out.push_str(&text[pos..start]);
        pos = next_heading(text, end, level).unwrap_or(text.len());
    }

    out.push_str(&text[pos..]);
    out
}

/// Byte offset of the newline starting the next heading of at most `level` `=` signs.
///
/// Subsections (longer runs) belong to the section being removed.
fn next_heading(text: &str, from: usize, level: usize) -> Option<usize> {
    let mut search = from;

    while let Some(offset) = text[search..].find("\n=") {
        let at = search + offset;
        let run = text[at + 1..].bytes().take_while(|&b| b == b'=').count();
        if run <= level {
            return Some(at);
        }
        search = at + 1;
    }

    None
}

/// Strip heading lines (`== Title ==`), leaving an empty line.
///
/// `heading` must capture the opening and closing `=` runs as groups 1 and 2.
pub fn strip_headings(text: &str, heading: &Regex) -> Option<String> {
    let mut changed = false;
    let out = heading.replace_all(text, |caps: &Captures| {
        if caps[1].len() == caps[2].len() {
            changed = true;
            String::new()
        } else {
            caps[0].to_string()
        }
    });

    if changed {
        Some(out.into_owned())
    } else {
        None
    }
}
