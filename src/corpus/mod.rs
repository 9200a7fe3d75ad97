//! Corpus reading: per-session transcript files into per-speaker utterance tables.

mod charset;
mod line;
mod reader;

pub use charset::{CharacterSet, RESERVED_CHARS};
pub use line::{parse_line, seconds_to_frame, Segment};
pub use reader::CorpusReader;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Channel of a two-sided conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Speaker {
    #[value(name = "A")]
    A,
    #[value(name = "B")]
    B,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::A => "A",
            Speaker::B => "B",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One segment of speech with its cleaned transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub start_frame: i64,
    pub end_frame: i64,
    pub transcript: String,
}

/// Utterances of one session+speaker keyed by 4-digit index (`0000`, `0001`, ...).
pub type UtteranceTable = BTreeMap<String, Utterance>;

/// Utterance tables keyed by speaker name (session name + speaker tag).
pub type SpeakerTable = BTreeMap<String, UtteranceTable>;

/// Zero-padded key of the `index`-th utterance.
pub fn utterance_key(index: usize) -> String {
    format!("{:04}", index)
}
