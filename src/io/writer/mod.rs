/*!
# Batched file writing

Tokenized articles are written by a [BatchWriter], either one article per file or in batches of a
given size.
Each file is written to a temporary `.part` file first and renamed when complete, so an
interrupted run never leaves a truncated numbered file behind.
!*/
mod batchwriter;

pub use batchwriter::BatchWriter;
