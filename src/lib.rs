//! Character-level CTC label preparation for the Fisher corpus.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod discovery;
pub mod error;
pub mod global;
pub mod labels;
pub mod normalizer;
pub mod pipeline;
pub mod vocab;

pub use error::{LabelError, Result};
pub use pipeline::{read_transcripts, LabelRun, RunSummary};
