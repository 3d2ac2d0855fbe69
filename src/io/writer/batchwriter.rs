//! Batched writing of tokenized articles.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::Error;

/// Writes tokenized articles into sequentially numbered files (`wiki-1.txt`, `wiki-2.txt`...),
/// one sentence per line, tokens separated by a space.
///
/// With a size limit, articles are buffered until the buffer reaches the limit, then committed.
/// Without one, each article gets its own file.
///
/// Files are committed atomically: content is written to a `.part` file which is then renamed.
///
/// Note: an article is never split between files, so files may exceed the limit by up to one article.
pub struct BatchWriter {
    dst: PathBuf,
    size_limit: Option<u64>,
    buffer: String,
    nb_files: u64,
}

impl BatchWriter {
    /// Create a new [BatchWriter].
    /// Nothing is created until an article is committed.
    /// `size_limit` is in bytes, `None` means one article per file.
    pub fn new(dst: &Path, size_limit: Option<u64>) -> Self {
        Self {
            dst: dst.to_path_buf(),
            size_limit,
            buffer: String::new(),
            nb_files: 0,
        }
    }

    /// Number of committed files.
    pub fn nb_files(&self) -> u64 {
        self.nb_files
    }

    /// Add an article, committing the buffer if needed.
    ///
    /// Articles without sentences are ignored.
    pub fn write_article(&mut self, sentences: &[Vec<String>]) -> Result<(), Error> {
        if sentences.is_empty() {
            return Ok(());
        }

        for sentence in sentences {
            if !self.buffer.is_empty() {
                self.buffer.push('\n');
            }
            self.buffer.push_str(&sentence.join(" "));
        }

        match self.size_limit {
            None => self.commit(),
            Some(limit) if self.buffer.len() as u64 >= limit => self.commit(),
            Some(_) => Ok(()),
        }
    }

    /// Write the buffer into the next file.
    pub fn commit(&mut self) -> Result<(), Error> {
        if self.buffer.is_empty() {
            warn!("not committing an empty file");
            return Ok(());
        }

        let filename = format!("wiki-{}.txt", self.nb_files + 1);
        let path = self.dst.join(&filename);
        let part = self.dst.join(format!("{}.part", filename));

        debug!("writing {:?}", part);
        let mut file = File::create(&part)?;
        file.write_all(self.buffer.as_bytes())?;
        file.sync_all()?;
        std::fs::rename(&part, &path)?;

        self.nb_files += 1;
        info!("created {:?} ({} bytes)", path, self.buffer.len());
        self.buffer.clear();
        Ok(())
    }

    /// Commit what remains in the buffer and return the number of files written.
    pub fn finish(mut self) -> Result<u64, Error> {
        if !self.buffer.is_empty() {
            self.commit()?;
        }
        Ok(self.nb_files)
    }
}
