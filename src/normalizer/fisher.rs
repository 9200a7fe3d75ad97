use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::normalizer::TranscriptionNormalizer;

/// Marker for annotated laughter.
pub const LAUGHTER: char = 'L';
/// Marker for annotated non-speech noise.
pub const NOISE: char = 'N';
/// Word and utterance boundary.
pub const SILENCE: char = '_';

// Applied in order, each as a literal replacement.
const EVENT_TAGS: &[(&str, &str)] = &[
    ("[laughter]", "L"),
    ("[laugh]", "L"),
    ("[noise]", "N"),
    ("[sigh]", "N"),
    ("[cough]", "N"),
    ("[mn]", "N"),
    ("[breath]", "N"),
    ("[lipsmack]", "N"),
    ("[sneeze]", "N"),
];

const DELETED_TOKENS: &[&str] = &["[pause]", "[[skip]]", "?", "*", "~", ",", "."];

/// Normalizer for Fisher transcript annotations
pub struct FisherNormalizer {
    foreign_regex: Regex,
    empty_parens_regex: Regex,
    double_parens_regex: Regex,
}

impl FisherNormalizer {
    pub fn new() -> Result<Self> {
        // Any <german ...> span drops the whole transcript
        let foreign_regex = Regex::new(r"^.*<german .+>")?;
        // (( )) holding only whitespace
        let empty_parens_regex = Regex::new(r"\(\(\s+\)\)")?;
        // Greedy prefix: the last unwrappable (( ... )) is matched first
        let double_parens_regex = Regex::new(r"^(.*)\(\( ([^(]+) \)\)(.*)")?;

        Ok(Self {
            foreign_regex,
            empty_parens_regex,
            double_parens_regex,
        })
    }

    /// Strip `(( ` and ` ))` delimiters until none are left.
    fn unwrap_double_parens(&self, mut text: String) -> String {
        loop {
            let unwrapped = match self.double_parens_regex.captures(&text) {
                Some(caps) => format!("{}{}{}", &caps[1], &caps[2], &caps[3]),
                None => break,
            };
            assert!(
                unwrapped.len() < text.len(),
                "unwrapping double parentheses must shorten the transcript"
            );
            text = unwrapped;
        }
        text
    }
}

impl TranscriptionNormalizer for FisherNormalizer {
    fn normalize(&self, raw_transcript: &str) -> String {
        let mut text = raw_transcript.to_string();

        for (tag, marker) in EVENT_TAGS {
            text = text.replace(tag, marker);
        }

        for token in DELETED_TOKENS {
            text = text.replace(token, "");
        }

        if self.foreign_regex.is_match(&text) {
            debug!("Dropping transcript with foreign speech: {:?}", raw_transcript);
            text.clear();
        }

        text = self.empty_parens_regex.replace_all(&text, "").into_owned();
        text = self.unwrap_double_parens(text);

        text = text.replace('&', " and ");

        // Single pass: three spaces become two, not one.
        text = text.replace("  ", " ");

        text.replace(' ', "_")
    }

    fn name(&self) -> &'static str {
        "FisherNormalizer"
    }
}
