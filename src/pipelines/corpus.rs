//! Wikipedia dump to tokenized corpus.
//!
//! # Processing
//! 1. Pages are streamed from the dump, and non-article pages are skipped (see [crate::io::DumpReader]),
//! 1. Each article's wikitext goes through the markup filter,
//! 1. The cleaned text is normalized, split into sentences and tokenized,
//! 1. Tokenized articles are written in batches (or one per file), and a run summary is saved
//!    as `summary.json` next to them.
use std::fs::File;
use std::path::PathBuf;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::{Article, BatchWriter, DumpReader};
use crate::lexicon::Lexicon;
use crate::markup::{MarkupFilter, MarkupOptions};
use crate::pipelines::pipeline::Pipeline;
use crate::tokenize::Tokenizer;

/// Default batch size, in bytes.
pub const DEFAULT_BATCH_SIZE: u64 = 50_000_000;
/// Default minimum sentence size, in tokens.
pub const DEFAULT_MIN_SENTENCE_SIZE: usize = 3;

/// Corpus generation parameters.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Dump location (`.xml`, `.xml.bz2` or `.xml.gz`).
    pub src: PathBuf,
    /// Output folder, created if needed.
    pub dst: PathBuf,
    /// Write each article in its own file instead of batching.
    pub one_per_file: bool,
    /// Stop after this many articles, 0 meaning no limit.
    pub max_articles: usize,
    pub min_sentence_size: usize,
    /// Batch size in bytes, ignored with [CorpusConfig::one_per_file].
    pub batch_size: u64,
    pub markup: MarkupOptions,
}

impl CorpusConfig {
    /// Create a configuration with default parameters.
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            one_per_file: false,
            max_articles: 0,
            min_sentence_size: DEFAULT_MIN_SENTENCE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            markup: MarkupOptions::default(),
        }
    }
}

/// Counts of a corpus generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Articles processed.
    pub articles: u64,
    /// Pages skipped by the dump reader, and articles that had no sentence left.
    pub skipped: u64,
    pub sentences: u64,
    pub tokens: u64,
    /// Files written.
    pub files: u64,
}

pub struct CorpusBuilder {
    config: CorpusConfig,
    lexicon: Lexicon,
}

impl CorpusBuilder {
    /// Create a new builder, compiling the lexicon.
    pub fn new(config: CorpusConfig) -> Result<Self, Error> {
        debug!("corpus config: {:?}", config);
        Ok(Self {
            config,
            lexicon: Lexicon::new()?,
        })
    }

    /// Get a reference to the builder's config.
    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Filter, tokenize and write `articles`.
    ///
    /// Stops at the first error. Files committed before it are left untouched.
    /// The returned summary has no file count, since `writer` is not finished here.
    pub fn process<I>(&self, articles: I, writer: &mut BatchWriter) -> Result<RunSummary, Error>
    where
        I: Iterator<Item = Result<Article, Error>>,
    {
        let filter = MarkupFilter::new(&self.lexicon, self.config.markup);
        let tokenizer = Tokenizer::new(&self.lexicon);
        let limit = match self.config.max_articles {
            0 => usize::MAX,
            max => max,
        };

        let mut summary = RunSummary::default();
        for article in articles.take(limit) {
            let article = article?;
            debug!("processing {:?}", article.title);
            summary.articles += 1;

            let text = filter.filter(&article.text);
            let sentences = tokenizer.tokenize(&text, true, self.config.min_sentence_size);
            if sentences.is_empty() {
                debug!("no sentence left in {:?}", article.title);
                summary.skipped += 1;
                continue;
            }

            summary.sentences += sentences.len() as u64;
            summary.tokens += sentences.iter().map(Vec::len).sum::<usize>() as u64;
            writer.write_article(&sentences)?;
        }

        if summary.articles as usize == limit {
            info!("stopped after {} articles", limit);
        }
        Ok(summary)
    }
}

impl Pipeline<RunSummary> for CorpusBuilder {
    fn run(&self) -> Result<RunSummary, Error> {
        std::fs::create_dir_all(&self.config.dst)?;

        let mut reader = DumpReader::from_path(&self.config.src)?;
        let size_limit = if self.config.one_per_file {
            None
        } else {
            Some(self.config.batch_size)
        };
        let mut writer = BatchWriter::new(&self.config.dst, size_limit);

        let mut summary = self.process(&mut reader, &mut writer)?;
        summary.skipped += reader.skipped();
        summary.files = writer.finish()?;

        let summary_file = File::create(self.config.dst.join("summary.json"))?;
        serde_json::to_writer_pretty(summary_file, &summary)?;

        info!(
            "{} articles ({} skipped), {} sentences, {} tokens written in {} files",
            summary.articles, summary.skipped, summary.sentences, summary.tokens, summary.files
        );
        Ok(summary)
    }
}
