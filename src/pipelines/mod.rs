//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, implemented by [CorpusBuilder].
pub mod corpus;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use corpus::{CorpusBuilder, CorpusConfig, RunSummary};
pub use pipeline::Pipeline;
