/*!
# IO utilities

Dump reading ([reader]) and tokenized text saving ([writer]).
!*/
pub mod reader;
pub mod writer;

pub use reader::{Article, DumpReader};
pub use writer::BatchWriter;
