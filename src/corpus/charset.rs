use std::collections::BTreeSet;

use crate::normalizer::{LAUGHTER, NOISE};

/// Characters every vocabulary carries whether or not the corpus uses them.
pub const RESERVED_CHARS: [char; 4] = ['5', '9', LAUGHTER, NOISE];

/// Accumulates every character seen across all transcripts of a run.
#[derive(Debug, Default, Clone)]
pub struct CharacterSet {
    chars: BTreeSet<char>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    pub fn inject_reserved(&mut self) {
        self.chars.extend(RESERVED_CHARS);
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}
