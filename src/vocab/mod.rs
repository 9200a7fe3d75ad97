//! Character vocabulary and the `char2num.txt` mapping file.
//!
//! The mapping file holds one `<char>  <index>` line per character, sorted by
//! code point, with contiguous indices from 0.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::corpus::CharacterSet;
use crate::error::{LabelError, Result};

const SEPARATOR: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    chars: Vec<char>,
    index: HashMap<char, usize>,
}

impl Vocabulary {
    /// Assign indices to the characters in sorted order.
    pub fn from_charset(charset: &CharacterSet) -> Self {
        Self::from_sorted(charset.iter().collect())
    }

    fn from_sorted(chars: Vec<char>) -> Self {
        let index = chars.iter().enumerate().map(|(i, c)| (*c, i)).collect();
        Self { chars, index }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Render the mapping file contents.
    pub fn to_mapping_string(&self) -> String {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}{}{}\n", c, SEPARATOR, i))
            .collect()
    }

    /// Write the mapping file, replacing any previous one.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| LabelError::io(parent, e))?;
        }

        fs::write(path, self.to_mapping_string()).map_err(|e| LabelError::io(path, e))?;

        info!("Wrote {} characters to {:?}", self.len(), path);
        Ok(())
    }

    /// Load a mapping file written by [`Vocabulary::write`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LabelError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        let mut seen = HashSet::new();
        for (line_index, line) in content.lines().enumerate() {
            let invalid = || LabelError::InvalidMapping {
                path: path.to_path_buf(),
                line: line_index + 1,
                entry: line.to_string(),
            };

            let (symbol, index) = line.split_once(SEPARATOR).ok_or_else(invalid)?;
            let mut symbol_chars = symbol.chars();
            let c = match (symbol_chars.next(), symbol_chars.next()) {
                (Some(c), None) => c,
                _ => return Err(invalid()),
            };
            if !seen.insert(c) {
                return Err(invalid());
            }
            let index: usize = index.trim().parse().map_err(|_| invalid())?;
            entries.push((index, c));
        }

        entries.sort_unstable();
        for (expected, (index, _)) in entries.iter().enumerate() {
            if *index != expected {
                return Err(LabelError::InvalidMapping {
                    path: path.to_path_buf(),
                    line: expected + 1,
                    entry: format!("index {} is not contiguous", index),
                });
            }
        }

        debug!("Loaded {} characters from {:?}", entries.len(), path);
        Ok(Self::from_sorted(entries.into_iter().map(|(_, c)| c).collect()))
    }

    /// Map every character of `transcript` to its index.
    pub fn encode(&self, transcript: &str) -> Result<Vec<i64>> {
        transcript
            .chars()
            .map(|c| {
                self.index_of(c)
                    .map(|i| i as i64)
                    .ok_or_else(|| LabelError::UnresolvedCharacter {
                        character: c,
                        transcript: transcript.to_string(),
                    })
            })
            .collect()
    }

    /// Map indices back to characters, `None` if any index is out of range.
    pub fn decode(&self, labels: &[i64]) -> Option<String> {
        labels
            .iter()
            .map(|&i| usize::try_from(i).ok().and_then(|i| self.chars.get(i).copied()))
            .collect()
    }
}

/// Encode `transcript` with the mapping file at `mapping_path`.
pub fn char2num(transcript: &str, mapping_path: &Path) -> Result<Vec<i64>> {
    Vocabulary::load(mapping_path)?.encode(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vocabulary {
        let mut charset = CharacterSet::new();
        charset.observe("_hi_");
        charset.inject_reserved();
        Vocabulary::from_charset(&charset)
    }

    #[test]
    fn test_mapping_string_format() {
        assert_eq!(
            sample().to_mapping_string(),
            "5  0\n9  1\nL  2\nN  3\n_  4\nh  5\ni  6\n"
        );
    }

    #[test]
    fn test_encode_and_decode() {
        let vocab = sample();
        let labels = vocab.encode("_hi_L_").unwrap();
        assert_eq!(labels, vec![4, 5, 6, 4, 2, 4]);
        assert_eq!(vocab.decode(&labels).as_deref(), Some("_hi_L_"));
        assert_eq!(vocab.decode(&[99]), None);
        assert_eq!(vocab.decode(&[-1]), None);
    }

    #[test]
    fn test_unresolved_character_is_an_error() {
        let err = sample().encode("_hello_").unwrap_err();
        match err {
            LabelError::UnresolvedCharacter { character, .. } => assert_eq!(character, 'e'),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_overwrites_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labels/ctc/fisher/char2num.txt");

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale  0\nx  1\ny  2\nz  3\n").unwrap();

        let vocab = sample();
        vocab.write(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), vocab.to_mapping_string());
        assert_eq!(Vocabulary::load(&path).unwrap(), vocab);
        assert_eq!(char2num("_ih_", &path).unwrap(), vec![4, 6, 5, 4]);
    }

    #[test]
    fn test_load_rejects_bad_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("char2num.txt");

        fs::write(&path, "a 0\n").unwrap();
        assert!(matches!(
            Vocabulary::load(&path),
            Err(LabelError::InvalidMapping { line: 1, .. })
        ));

        fs::write(&path, "a  0\nbc  1\n").unwrap();
        assert!(matches!(
            Vocabulary::load(&path),
            Err(LabelError::InvalidMapping { line: 2, .. })
        ));

        fs::write(&path, "a  0\nb  2\n").unwrap();
        assert!(Vocabulary::load(&path).is_err());

        fs::write(&path, "a  0\na  1\n").unwrap();
        assert!(matches!(
            Vocabulary::load(&path),
            Err(LabelError::InvalidMapping { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Vocabulary::load(Path::new("/nonexistent/char2num.txt")),
            Err(LabelError::MissingFile { .. })
        ));
    }
}
