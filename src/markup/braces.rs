//! Balanced span collapsing.
//!
//! Templates (`{{ }}`) and tables (`{| |}`) nest arbitrarily. Rather than substituting the
//! innermost span until nothing changes, a single left-to-right pass keeps a stack of open
//! delimiters and replaces each span as soon as its closing delimiter is found. A nested span
//! is therefore swallowed by the span enclosing it, and the outermost one is replaced once.
//!
//! Unbalanced input degrades gracefully: unmatched openers and closers are kept verbatim,
//! while complete spans found inside an unmatched opener are still replaced.
use log::debug;

/// Nesting depth after which openers are no longer tracked.
///
/// This only bounds memory on pathological input; real pages stay far below it.
pub const MAX_DEPTH: usize = 256;

/// Replace every balanced `open ... close` span of `text` by `replace(body)`, where
/// `body` is the span content with nested spans already replaced.
pub fn collapse<F>(text: &str, open: &str, close: &str, replace: F) -> String
where
    F: Fn(&str) -> &'static str,
{
    let mut out = String::with_capacity(text.len());
    // byte offsets of the tracked openers in `out`
    let mut stack: Vec<usize> = Vec::new();
    // openers seen past MAX_DEPTH, kept as plain text
    let mut untracked = 0usize;

    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];

        if rest.starts_with(open) {
            if stack.len() < MAX_DEPTH {
                stack.push(out.len());
            } else {
                untracked += 1;
            }
            out.push_str(open);
            pos += open.len();
            continue;
        }

        if rest.starts_with(close) {
            if untracked > 0 {
                untracked -= 1;
                out.push_str(close);
                pos += close.len();
                continue;
            }
            if let Some(start) = stack.pop() {
                let replacement = replace(&out[start + open.len()..]);
                out.truncate(start);
                out.push_str(replacement);
                pos += close.len();
                continue;
            }
        }

        // delimiters are ASCII, so `pos` always sits on a char boundary
        match rest.chars().next() {
            Some(c) => {
                out.push(c);
                pos += c.len_utf8();
            }
            None => break,
        }
    }

    if !stack.is_empty() || untracked > 0 {
        debug!(
            "{} unmatched {:?} left in text",
            stack.len() + untracked,
            open
        );
    }

    out
}
