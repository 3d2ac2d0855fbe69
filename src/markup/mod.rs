/*! Wikitext to plain text.

The [MarkupFilter] strips MediaWiki markup from a page, keeping its prose and its line structure.
Elements that cannot be rendered as prose are either removed or replaced by a [sentinel] token.

The passes are applied in a fixed order, each one relying on the previous ones:

1. redirects and disambiguation pages are discarded,
1. entities and dashes are normalized, comments, interwiki links, categories and
   bibliographic sections are removed,
1. `<math>` blocks become [sentinel::MATH] *before* braces are looked at, since LaTeX is full of them,
1. templates and tables are collapsed into [sentinel::TEMPLATE],
1. tags that hold no prose (references, tables, galleries...) are removed with their content,
1. headings and emphasis are stripped, links are resolved, external links become [sentinel::LINK],
1. line break tags become newlines, formatting tags are stripped, lists are dropped.

Malformed markup never makes the filter fail: unresolved pieces are left in the text and the
sentences holding them are discarded later (see [crate::filtering::sentence::Residue]).
!*/
mod braces;
mod links;
mod sections;

use regex::{Captures, Regex, Replacer};

use crate::error::Error;
use crate::lexicon::{replace, sub, Lexicon};
use crate::sentinel;

/// Tags removed along with their content.
const DROPPED_TAGS: [&str; 20] = [
    "ref",
    "references",
    "table",
    "tr",
    "td",
    "th",
    "code",
    "source",
    "syntaxhighlight",
    "pre",
    "ul",
    "ol",
    "dl",
    "gallery",
    "timeline",
    "noinclude",
    "includeonly",
    "onlyinclude",
    "small",
    "sup",
];

/// Tags stripped while their content is kept.
const INLINE_TAGS: [&str; 23] = [
    "blockquote",
    "tt",
    "b",
    "i",
    "u",
    "s",
    "sub",
    "span",
    "big",
    "font",
    "poem",
    "nowiki",
    "div",
    "center",
    "em",
    "strong",
    "cite",
    "q",
    "abbr",
    "li",
    "del",
    "ins",
    "p",
];

/// Templates that are dropped without a sentinel (lowercase name prefixes).
///
/// Citation-needed marks sit in the middle of otherwise clean sentences.
const SILENT_TEMPLATES: [&str; 2] = ["carece de fontes", "citação necessária"];

/// Link resolution is repeated while links change, at most this many times.
const MAX_LINK_PASSES: usize = 8;

/// Markup filter policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Keep the caption of piped image links (`[[Imagem:x.png|miniatura|caption]]`)
    /// instead of discarding the whole link.
    pub keep_image_captions: bool,
    /// Replace IPA pronunciation templates with [sentinel::IPA] instead of [sentinel::TEMPLATE].
    pub ipa_sentinel: bool,
}

/// Compiled markup patterns, held by [Lexicon].
pub(crate) struct MarkupRules {
    discarded_page: Regex,
    comment: Regex,
    interwiki_tail: Regex,
    category: Regex,
    named_section: Regex,
    math: Regex,
    parameter: Regex,
    dropped_tags: Vec<Regex>,
    heading: Regex,
    bold: Regex,
    italic: Regex,
    link_plain: Regex,
    link_annex: Regex,
    link_media: Regex,
    link_image: Regex,
    link_piped: Regex,
    file_namespace: Regex,
    external_labeled: Regex,
    external_bracketed: Regex,
    external_bare: Regex,
    horizontal_rule: Regex,
    file_link: Regex,
    line_break: Regex,
    inline_tags: Regex,
    list_block: Regex,
    hyphen_run: Regex,
}

impl MarkupRules {
    pub(crate) fn compile() -> Result<Self, Error> {
        let dropped_tags = DROPPED_TAGS
            .iter()
            .map(|tag| {
                // self-closing, paired, then stray opening/closing tags
                Regex::new(&format!(
                    r"(?is)<{0}\b[^>]*/>|<{0}\b[^>]*>.*?</{0}\s*>|</?{0}\b[^>]*>",
                    tag
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            discarded_page: Regex::new(
                r"(?i)\A\s*(?:#\s*redirec(?:ionamento|t)\b|\{\{\s*desambiguação)",
            )?,
            comment: Regex::new(r"(?s)<!--.*?-->")?,
            interwiki_tail: Regex::new(
                r"(?:\n[ \t]*\[\[(?:[a-z]{2}[\w-]*|:?(?i:categoria)):[^\]\n]*\]\][ \t]*)+\s*\z",
            )?,
            category: Regex::new(r"(?i)\[\[:?categoria:.*?\]\]")?,
            named_section: Regex::new(
                r"(?im)^(=+)[ \t]*(?:\{\{)?[ \t]*(?:ver também|bibliografia|ligações externas|links externos)[ \t]*(?:\}\})?[ \t]*(=+)[ \t]*$",
            )?,
            math: Regex::new(r"(?is)<math\b[^>]*>.*?</math\s*>")?,
            parameter: Regex::new(r"\{\{\{[^{}]*\}\}\}")?,
            dropped_tags,
            heading: Regex::new(r"(?m)^(=+)[^\n]*?(=+)[ \t]*$")?,
            bold: Regex::new(r"'''(.+?)'''")?,
            italic: Regex::new(r"''(.+?)''")?,
            link_plain: Regex::new(r"\[\[([^\]\[|]*)\]\]")?,
            link_annex: Regex::new(r"\[\[((?i:anexo):[^\]\[|:]*)\|([^\]\[]*)\]\]")?,
            link_media: Regex::new(r"(?s)\[\[(?i:multim.dia):.*?\]\]")?,
            link_image: Regex::new(
                r"\[\[\s*:?\s*(?i:arquivo|imagem?|ficheiro|file|image)\s*:[^\]\[|]*\|([^\]\[]*)\]\]",
            )?,
            link_piped: Regex::new(r"\[\[([^\]\[|]*)\|([^\]\[]*)\]\]")?,
            file_namespace: Regex::new(
                r"(?i)^\s*:?\s*(?:arquivo|imagem?|ficheiro|file|image|media)\s*:",
            )?,
            external_labeled: Regex::new(r"\[(?:https?|ftp)://[^\]\[\s]+?\s+([^\]\n]+?)\]")?,
            external_bracketed: Regex::new(r"\[(?:https?|ftp)://[^\]\[\s]+\]")?,
            external_bare: Regex::new(r"(?:https?|ftp)://[^\]\[\s]+")?,
            horizontal_rule: Regex::new(r"\n-{4,}")?,
            file_link: Regex::new(
                r"(?is)\[\[\s*:?\s*(?:arquivo|imagem?|ficheiro|file|image)\s*:.*?\]\]",
            )?,
            line_break: Regex::new(r"(?i)</?(?:br|hr)\b[^>]*>")?,
            inline_tags: Regex::new(&format!(r"(?i)</?(?:{})\b[^>]*>", INLINE_TAGS.join("|")))?,
            list_block: Regex::new(r"(?:\A|\n)(?:[#*:;]+[^\n]+\n)+")?,
            hyphen_run: Regex::new(r"-{2,}")?,
        })
    }
}

/// Wikitext filter.
pub struct MarkupFilter<'a> {
    rules: &'a MarkupRules,
    options: MarkupOptions,
}

impl<'a> MarkupFilter<'a> {
    pub fn new(lexicon: &'a Lexicon, options: MarkupOptions) -> Self {
        Self {
            rules: &lexicon.markup,
            options,
        }
    }

    /// Get the filter's options.
    pub fn options(&self) -> &MarkupOptions {
        &self.options
    }

    /// Convert a page's wikitext into plain text.
    ///
    /// Redirects and disambiguation pages yield an empty string.
    pub fn filter(&self, raw: &str) -> String {
        let rules = self.rules;
        if rules.discarded_page.is_match(raw) {
            return String::new();
        }

        let mut t = normalize_entities(raw);
        t = sub(&rules.comment, t, "");
        t = sub(&rules.interwiki_tail, t, "");
        t = sub(&rules.category, t, "");
        t = sections::remove_named(&t, &rules.named_section);

        // math goes first: LaTeX braces would be taken for templates
        t = sub(&rules.math, t, sentinel::MATH);
        // defaults may hold parameters themselves: {{{a|{{{b}}}}}}
        while apply(&mut t, &rules.parameter, "") {}
        t = braces::collapse(&t, "{{", "}}", |body| self.template_replacement(body));
        t = braces::collapse(&t, "{|", "|}", |_| sentinel::TEMPLATE);

        for tag in rules.dropped_tags.iter() {
            t = sub(tag, t, "");
        }
        if let Some(stripped) = sections::strip_headings(&t, &rules.heading) {
            t = stripped;
        }
        t = sub(&rules.bold, t, "$1");
        t = sub(&rules.italic, t, "$1");

        t = self.resolve_links(t);
        t = sub(&rules.external_labeled, t, "$1");
        t = sub(&rules.external_bracketed, t, sentinel::LINK);
        t = sub(&rules.external_bare, t, sentinel::LINK);
        t = sub(&rules.horizontal_rule, t, "\n");
        t = sub(&rules.file_link, t, "");
        t = braces::collapse(&t, "{|", "|}", |_| "");

        t = sub(&rules.line_break, t, "\n");
        t = sub(&rules.inline_tags, t, "");

        // lists may be the last thing on the page
        t.push('\n');
        t = sub(&rules.list_block, t, "\n\n");

        sub(&rules.hyphen_run, t, "-")
    }

    /// Replacement of a collapsed template, given its body.
    fn template_replacement(&self, body: &str) -> &'static str {
        let name: String = body.trim_start().chars().take(24).collect();
        let name = name.to_lowercase();

        if SILENT_TEMPLATES.iter().any(|silent| name.starts_with(silent)) {
            ""
        } else if self.options.ipa_sentinel
            && (name.starts_with("ipa2|") || name.starts_with("ipa|"))
        {
            sentinel::IPA
        } else {
            sentinel::TEMPLATE
        }
    }

    /// Apply link rules in order until no link is left to resolve.
    ///
    /// Order matters: plain links go before image links so that links nested in captions are
    /// resolved before the enclosing image link is looked at.
    fn resolve_links(&self, mut t: String) -> String {
        let rules = self.rules;
        let files = &rules.file_namespace;

        for _ in 0..MAX_LINK_PASSES {
            let mut changed = apply(&mut t, &rules.link_media, sentinel::FILE);
            changed |= apply(&mut t, &rules.link_plain, |caps: &Captures| {
                links::resolve(caps, files)
            });
            changed |= apply(&mut t, &rules.link_annex, |caps: &Captures| {
                links::resolve(caps, files)
            });
            changed |= apply(&mut t, &rules.link_image, |caps: &Captures| {
                self.image_caption(caps)
            });
            changed |= apply(&mut t, &rules.link_piped, |caps: &Captures| {
                links::resolve(caps, files)
            });

            if !changed {
                break;
            }
        }

        t
    }

    fn image_caption(&self, caps: &Captures) -> String {
        match caps.get(1) {
            Some(caption) if self.options.keep_image_captions => {
                links::last_segment(caption.as_str()).to_string()
            }
            _ => String::new(),
        }
    }
}

/// Convert a page's wikitext into plain text with default [MarkupOptions].
pub fn filter_markup(lexicon: &Lexicon, raw: &str) -> String {
    MarkupFilter::new(lexicon, MarkupOptions::default()).filter(raw)
}

/// Non-breaking spaces become spaces, en/em dashes become hyphens.
fn normalize_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .chars()
        .map(|c| match c {
            '\u{a0}' => ' ',
            '\u{2013}' | '\u{2014}' => '-',
            c => c,
        })
        .collect()
}

/// In-place [replace], returning whether anything changed.
fn apply<R: Replacer>(text: &mut String, re: &Regex, rep: R) -> bool {
    match replace(re, text, rep) {
        Some(replaced) => {
            *text = replaced;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_markup, MarkupFilter, MarkupOptions};
    use crate::lexicon::Lexicon;

    fn filter(raw: &str) -> String {
        let lexicon = Lexicon::new().unwrap();
        filter_markup(&lexicon, raw)
    }

    fn assert_no_markup(text: &str) {
        for marker in ["{{", "}}", "[[", "]]", "{|", "|}"] {
            assert!(!text.contains(marker), "{:?} found in {:?}", marker, text);
        }
    }

    #[test]
    fn redirects_and_disambiguations() {
        assert_eq!(filter("#REDIRECIONAMENTO [[Brasil]]"), "");
        assert_eq!(filter("#REDIRECT [[Brasil]]"), "");
        assert_eq!(filter("{{desambiguação}}\n'''Mercúrio''' pode ser:"), "");
    }

    #[test]
    fn nested_templates() {
        assert_eq!(filter("{{ a {{ b {{ c }} }} }}").trim(), "__TEMPLATE__");
    }

    #[test]
    fn math_before_templates() {
        assert_eq!(
            filter(r"A área é <math>\frac{a}{b^{2}}</math>.").trim(),
            "A área é __MATH__."
        );
    }

    #[test]
    fn silent_templates() {
        assert_eq!(
            filter("O rio é longo{{carece de fontes|data=maio de 2020}}.").trim(),
            "O rio é longo."
        );
    }

    #[test]
    fn ipa_policy() {
        let lexicon = Lexicon::new().unwrap();
        let text = "Lisboa {{IPA2|liʒˈboɐ}} é a capital.";

        let default = MarkupFilter::new(&lexicon, MarkupOptions::default());
        assert_eq!(default.filter(text).trim(), "Lisboa __TEMPLATE__ é a capital.");

        let ipa = MarkupFilter::new(
            &lexicon,
            MarkupOptions {
                ipa_sentinel: true,
                ..Default::default()
            },
        );
        assert_eq!(ipa.filter(text).trim(), "Lisboa __IPA__ é a capital.");
    }

    #[test]
    fn parameters_and_tables() {
        assert_eq!(filter("a {{{largura|200}}} b").trim(), "a  b");
        assert_eq!(filter("Texto {{{a|{{{b}}}}}} fim.").trim(), "Texto  fim.");
        assert_eq!(
            filter("Antes.\n{| class=\"wikitable\"\n|-\n| 1 || 2\n|}\nDepois.").trim(),
            "Antes.\n__TEMPLATE__\nDepois."
        );
    }

    #[test]
    fn comments_categories_interwikis() {
        let raw = "Texto <!-- nota\ninterna --> visível.\n[[Categoria:Rios do Brasil]]\n[[en:River]]\n[[fr:Fleuve]]";
        assert_eq!(filter(raw).trim(), "Texto  visível.");
    }

    #[test]
    fn bibliographic_sections() {
        let raw = "Intro.\n== Ver também ==\nOutro artigo.\n== História ==\nFundada em 1500.";
        let out = filter(raw);
        assert!(!out.contains("Outro artigo"));
        assert!(out.contains("Fundada em 1500."));
        assert!(!out.contains("História"));
    }

    #[test]
    fn references() {
        assert_eq!(
            filter("Fato.<ref name=\"a\">{{citar web|url=http://x.org}}</ref> Outro.<ref name=\"a\"/>")
                .trim(),
            "Fato. Outro."
        );
    }

    #[test]
    fn emphasis() {
        assert_eq!(
            filter("O '''Brasil''' é ''muito'' grande.").trim(),
            "O Brasil é muito grande."
        );
    }

    #[test]
    fn links() {
        assert_eq!(filter("[[Brasil|o país]]").trim(), "o país");
        assert_eq!(filter("o [[Brasil]] é").trim(), "o Brasil é");
        assert_eq!(filter("[[Arquivo:foo.jpg|legenda]]").trim(), "");
        assert_eq!(filter("[[Ficheiro:foo.jpg]]").trim(), "");
        assert_eq!(filter("ver [[Anexo:Lista de rios|lista]]").trim(), "ver lista");
        assert_eq!(filter("[[Multimédia:hino.ogg]]").trim(), "__FILE__");
        assert_eq!(filter("[[Rio|Rio|o rio]]").trim(), "o rio");
    }

    #[test]
    fn nested_links() {
        let out = filter("[[Imagem:rio.jpg|miniatura|Um [[rio]] grande]] O rio corre.");
        assert_eq!(out.trim(), "O rio corre.");
    }

    #[test]
    fn image_caption_policy() {
        let lexicon = Lexicon::new().unwrap();
        let f = MarkupFilter::new(
            &lexicon,
            MarkupOptions {
                keep_image_captions: true,
                ..Default::default()
            },
        );
        assert!(f.options().keep_image_captions);
        assert_eq!(f.filter("[[Arquivo:foo.jpg|legenda]]").trim(), "legenda");
        assert_eq!(
            f.filter("[[Imagem:rio.jpg|miniatura|Um [[rio]] grande]]").trim(),
            "Um rio grande"
        );
    }

    #[test]
    fn external_links() {
        assert_eq!(filter("[http://example.org Exemplo]").trim(), "Exemplo");
        assert_eq!(filter("[https://example.org]").trim(), "__LINK__");
        assert_eq!(filter("veja http://example.org/a.").trim(), "veja __LINK__");
    }

    #[test]
    fn tags() {
        assert_eq!(filter("a<br />b<br>c").trim(), "a\nb\nc");
        assert_eq!(
            filter("<span style=\"color:red\">texto</span> <div align=center>centro</div>").trim(),
            "texto centro"
        );
        assert_eq!(filter("x<sup>[1]</sup> y<small>nota</small>").trim(), "x y");
        assert_eq!(
            filter("<gallery>\nA.jpg|a\n</gallery>Fim.").trim(),
            "Fim."
        );
        assert_eq!(filter("resto</ref> solto").trim(), "resto solto");
    }

    #[test]
    fn lists() {
        assert_eq!(filter("Intro.\n* a\n* b\nFim."), "Intro.\n\nFim.\n");
        assert_eq!(filter("Intro.\n# um\n#: dois"), "Intro.\n\n");
    }

    #[test]
    fn dashes() {
        assert_eq!(filter("a — b – c").trim(), "a - b - c");
        assert_eq!(filter("a--b").trim(), "a-b");
        assert_eq!(filter("A ---- B").trim(), "A - B");
        assert_eq!(filter("a---b").trim(), "a-b");
        assert_eq!(filter("a&nbsp;b").trim(), "a b");
    }

    #[test]
    fn horizontal_rule() {
        assert_eq!(filter("a\n----\nb").trim(), "a\n\nb");
    }

    #[test]
    fn no_markup_left() {
        let raw = r#"{{Info/Rio
 |nome = Amazonas
 |imagem = [[Ficheiro:Amazon.jpg|250px]]
 |comprimento = {{formatnum:6992}} km
}}
O '''rio Amazonas''' é um [[rio]] da [[América do Sul|América do Sul]].<ref>{{citar livro|título=Rios}}</ref>
{| class="wikitable"
! Trecho !! Extensão
|-
| Alto || {{nts|1000}}
|}
[[Imagem:Amazonas.jpg|miniatura|O [[rio]] visto do alto]]
== Ver também ==
* [[Rio Negro]]
[[Categoria:Rios do Brasil]]
"#;
        let out = filter(raw);
        assert_no_markup(&out);
        assert!(out.contains("O rio Amazonas é um rio da América do Sul."));
    }
}
