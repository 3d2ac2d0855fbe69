use wikitok::lexicon::Lexicon;
use wikitok::markup::{filter_markup, MarkupFilter, MarkupOptions};
use wikitok::normalize::Normalizer;
use wikitok::tokenize::Tokenizer;

const ARTICLE: &str = r#"{{Info/Rio
 |nome = Amazonas
 |mapa = [[Ficheiro:Amazonas.svg|250px]]
 |extensão = {{formatnum:6992}} km
}}
O '''rio Amazonas''' é um [[rio]] da [[América do Sul]].<ref>{{citar livro|título=Rios|ano=2001}}</ref> Tem cerca de 6.992,06 km de extensão.
Segundo o Dr. Silva, é o maior do mundo{{carece de fontes|data=março de 2020}}.
<!-- comentário
em várias linhas -->
== Geografia ==
A bacia tem <math>7 \times 10^{6}</math> quilômetros quadrados e abrange vários países.<br />Nasce nos Andes.
{| class="wikitable"
! Trecho !! Extensão
|-
| Alto || {{nts|1000}}
|}
[[Imagem:Amazonas.jpg|miniatura|O [[rio]] visto do alto]]
Mais informações em [http://www.ana.gov.br Agência Nacional de Águas] e http://example.org.
=== Afluentes ===
* [[Rio Negro]]
* [[Rio Madeira]]
== Ver também ==
* [[Lista de rios]]
== Bibliografia ==
* Silva, J. ''Rios''. 2001.
[[Categoria:Rios do Brasil]]
[[en:Amazon River]]
[[fr:Amazone (fleuve)]]"#;

fn tokenize(lexicon: &Lexicon, raw: &str) -> Vec<Vec<String>> {
    let text = filter_markup(lexicon, raw);
    Tokenizer::new(lexicon).tokenize(&text, true, 3)
}

#[test]
fn article() {
    let lexicon = Lexicon::new().unwrap();
    let sentences = tokenize(&lexicon, ARTICLE);
    let lines: Vec<String> = sentences.iter().map(|s| s.join(" ")).collect();

    assert_eq!(
        lines,
        vec![
            "O rio Amazonas é um rio da América do Sul .",
            "Tem cerca de 9.999,99 km de extensão .",
            "Segundo o Dr. Silva , é o maior do mundo .",
            "A bacia tem __MATH__ quilômetros quadrados e abrange vários países .",
            "Nasce nos Andes .",
            "Mais informações em Agência Nacional de Águas e __LINK__",
        ]
    );
}

#[test]
fn no_markup_survives() {
    let lexicon = Lexicon::new().unwrap();
    for options in [
        MarkupOptions::default(),
        MarkupOptions {
            keep_image_captions: true,
            ipa_sentinel: true,
        },
    ] {
        let text = MarkupFilter::new(&lexicon, options).filter(ARTICLE);
        for marker in ["{{", "}}", "[[", "]]", "{|", "|}", "<ref", "<!--"] {
            assert!(!text.contains(marker), "{:?} in {:?}", marker, text);
        }
    }
}

#[test]
fn image_captions() {
    let lexicon = Lexicon::new().unwrap();
    let options = MarkupOptions {
        keep_image_captions: true,
        ..Default::default()
    };
    let text = MarkupFilter::new(&lexicon, options).filter(ARTICLE);
    assert!(text.contains("O rio visto do alto"));

    let text = filter_markup(&lexicon, ARTICLE);
    assert!(!text.contains("visto do alto"));
}

#[test]
fn redirects() {
    let lexicon = Lexicon::new().unwrap();
    assert!(tokenize(&lexicon, "#REDIRECIONAMENTO [[Rio Amazonas]]").is_empty());
    assert!(tokenize(&lexicon, "  #redirect [[Rio Amazonas]]").is_empty());
    assert!(tokenize(&lexicon, "{{Desambiguação}}\n'''Amazonas''' pode referir-se a:").is_empty());
}

#[test]
fn normalization_is_idempotent() {
    let lexicon = Lexicon::new().unwrap();
    let normalizer = Normalizer::new(&lexicon);
    let text = filter_markup(&lexicon, ARTICLE);

    for correct in [false, true] {
        let once = normalizer.clean_text(&text, correct);
        assert_eq!(normalizer.clean_text(&once, correct), once);
    }
}

#[test]
fn plain_text() {
    let lexicon = Lexicon::new().unwrap();
    let tokenizer = Tokenizer::new(&lexicon);

    assert_eq!(
        tokenizer.tokenize("O preço era de R$ 12.345,67 em 12/03/2020, às 12:30.", false, 0),
        vec![vec![
            "O", "preço", "era", "de", "R$", "12.345,67", "em", "12/03/2020", ",", "às", "12:30",
            "."
        ]]
    );
}
