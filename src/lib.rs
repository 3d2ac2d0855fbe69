/*! # Wikitok

Plain, sentence- and word-tokenized Portuguese text from Wikipedia dumps.

The library can be used either through the [pipelines::CorpusBuilder] pipeline, which reads a dump
and writes tokenized files, or piece by piece:

```
use wikitok::lexicon::Lexicon;
use wikitok::markup::filter_markup;
use wikitok::tokenize::Tokenizer;

let lexicon = Lexicon::new().unwrap();
let text = filter_markup(&lexicon, "O '''Brasil''' é um [[país]] da [[América do Sul]].");
let sentences = Tokenizer::new(&lexicon).tokenize(&text, true, 3);
assert_eq!(sentences[0], vec!["O", "Brasil", "é", "um", "país", "da", "América", "do", "Sul", "."]);
```
!*/
pub mod error;
pub mod filtering;
pub mod io;
pub mod lexicon;
pub mod markup;
pub mod normalize;
pub mod pipelines;
pub mod segment;
pub mod sentinel;
pub mod tokenize;
