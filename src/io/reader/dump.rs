/*! MediaWiki XML dump reader.

Streams `<page>` elements out of a dump, keeping only the title and text of each one.
Pages whose title or text marks them as non-articles are skipped, and the text of a page with an
excluded title is never buffered.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use log::{debug, info};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;
use crate::filtering::{Filter, TextFilter, TitleFilter};

const BUF_SIZE: usize = 4 * 1024 * 1024;

/// A page of the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub text: String,
}

/// Element whose text is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Title,
    Text,
}

/// Iterator over the articles of a dump.
///
/// Decoding errors (malformed XML, invalid UTF-8) are fatal: they are yielded as an `Err`.
pub struct DumpReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    title_filter: TitleFilter,
    text_filter: TextFilter,
    state: State,
    title: String,
    text: String,
    // current page has an excluded title
    skip: bool,
    skipped: u64,
}

impl DumpReader<Box<dyn BufRead>> {
    /// Open a dump file.
    ///
    /// `.bz2` and `.gz` files are decompressed on the fly, anything else is read as plain XML.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("bz2") => Box::new(BufReader::with_capacity(
                BUF_SIZE,
                MultiBzDecoder::new(BufReader::new(file)),
            )),
            Some("gz") => Box::new(BufReader::with_capacity(
                BUF_SIZE,
                MultiGzDecoder::new(BufReader::new(file)),
            )),
            _ => Box::new(BufReader::with_capacity(BUF_SIZE, file)),
        };

        info!("reading dump {:?}", path);
        Ok(Self::new(inner))
    }
}

impl<R: BufRead> DumpReader<R> {
    pub fn new(inner: R) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.trim_text(false);

        Self {
            reader,
            buf: Vec::new(),
            title_filter: TitleFilter::default(),
            text_filter: TextFilter::default(),
            state: State::Outside,
            title: String::new(),
            text: String::new(),
            skip: false,
            skipped: 0,
        }
    }

    /// Number of pages skipped so far because of their title or text.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Read until the next kept article, or the end of the dump.
    fn next_article(&mut self) -> Result<Option<Article>, Error> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"page" => {
                        self.title.clear();
                        self.text.clear();
                        self.skip = false;
                        self.state = State::Outside;
                    }
                    b"title" => self.state = State::Title,
                    b"text" if !self.skip => self.state = State::Text,
                    _ => (),
                },
                Event::Text(e) => match self.state {
                    State::Title => self.title.push_str(&e.unescape()?),
                    State::Text => self.text.push_str(&e.unescape()?),
                    State::Outside => (),
                },
                Event::CData(e) => {
                    if self.state != State::Outside {
                        let content = std::str::from_utf8(&e).map_err(|err| {
                            Error::Custom(format!("invalid UTF-8 in CDATA section: {}", err))
                        })?;
                        match self.state {
                            State::Title => self.title.push_str(content),
                            _ => self.text.push_str(content),
                        }
                    }
                }
                Event::End(e) => match e.local_name().as_ref() {
                    b"title" => {
                        self.state = State::Outside;
                        if !self.title_filter.detect(self.title.as_str()) {
                            debug!("skipping page {:?}", self.title);
                            self.skip = true;
                            self.skipped += 1;
                        }
                    }
                    b"text" => self.state = State::Outside,
                    b"page" => {
                        self.state = State::Outside;
                        if self.skip || self.text.trim().is_empty() {
                            continue;
                        }
                        if !self.text_filter.detect(self.text.as_str()) {
                            debug!("skipping page {:?}", self.title);
                            self.skipped += 1;
                            continue;
                        }
                        return Ok(Some(Article {
                            title: std::mem::take(&mut self.title),
                            text: std::mem::take(&mut self.text),
                        }));
                    }
                    _ => (),
                },
                Event::Eof => return Ok(None),
                _ => (),
            }
        }
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<Article, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_article().transpose()
    }
}
