/*! Dump reading

[DumpReader] streams [Article]s out of a MediaWiki XML export, optionally compressed.
!*/
mod dump;

pub use dump::{Article, DumpReader};
