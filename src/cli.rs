//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use wikitok::markup::MarkupOptions;
use wikitok::pipelines::CorpusConfig;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wikitok",
    about = "Plain, sentence- and word-tokenized Portuguese text from a Wikipedia dump."
)]
pub struct Wikitok {
    #[structopt(parse(from_os_str), help = "dump location (.xml, .xml.bz2 or .xml.gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(long = "one", help = "write each article in its own file")]
    pub one_per_file: bool,
    #[structopt(
        short = "m",
        long = "max",
        default_value = "0",
        help = "maximum number of articles to process (0 = all)"
    )]
    pub max_articles: usize,
    #[structopt(
        long = "min-sentence-size",
        default_value = "3",
        help = "minimum number of tokens of a sentence"
    )]
    pub min_sentence_size: usize,
    #[structopt(
        short = "s",
        long = "batch-size",
        default_value = "50000000",
        help = "batch file size, in bytes"
    )]
    pub batch_size: u64,
    #[structopt(long = "keep-image-captions", help = "keep the captions of image links")]
    pub keep_image_captions: bool,
    #[structopt(long = "ipa-sentinel", help = "replace IPA templates with __IPA__")]
    pub ipa_sentinel: bool,
}

impl From<Wikitok> for CorpusConfig {
    fn from(opt: Wikitok) -> CorpusConfig {
        let mut config = CorpusConfig::new(opt.src, opt.dst);
        config.one_per_file = opt.one_per_file;
        config.max_articles = opt.max_articles;
        config.min_sentence_size = opt.min_sentence_size;
        config.batch_size = opt.batch_size;
        config.markup = MarkupOptions {
            keep_image_captions: opt.keep_image_captions,
            ipa_sentinel: opt.ipa_sentinel,
        };
        config
    }
}
