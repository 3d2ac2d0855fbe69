//! # Wikitok
//!
//! Extracts plain, sentence- and word-tokenized Portuguese text from a Wikipedia XML dump.
//!
//! ## Getting started
//!
//! ```sh
//! wikitok 0.1.0
//! Plain, sentence- and word-tokenized Portuguese text from a Wikipedia dump.
//!
//! USAGE:
//!     wikitok [FLAGS] [OPTIONS] <src> <dst>
//!
//! FLAGS:
//!     -h, --help                   Prints help information
//!         --ipa-sentinel           replace IPA templates with __IPA__
//!         --keep-image-captions    keep the captions of image links
//!         --one                    write each article in its own file
//!     -V, --version                Prints version information
//!
//! OPTIONS:
//!     -s, --batch-size <batch-size>                  batch file size, in bytes [default: 50000000]
//!     -m, --max <max-articles>                       maximum number of articles to process (0 = all) [default: 0]
//!         --min-sentence-size <min-sentence-size>    minimum number of tokens of a sentence [default: 3]
//!
//! ARGS:
//!     <src>    dump location (.xml, .xml.bz2 or .xml.gz)
//!     <dst>    destination folder
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use wikitok::error;
use wikitok::pipelines::{CorpusBuilder, CorpusConfig, Pipeline};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Wikitok::from_args();
    debug!("cli args\n{:#?}", opt);

    let builder = CorpusBuilder::new(CorpusConfig::from(opt))?;
    let summary = builder.run()?;
    debug!("{:#?}", summary);

    Ok(())
}
