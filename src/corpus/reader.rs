use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::corpus::{
    parse_line, utterance_key, CharacterSet, Speaker, SpeakerTable, Utterance, UtteranceTable,
};
use crate::error::{LabelError, Result};
use crate::normalizer::TranscriptionNormalizer;

/// Reads label files for one speaker channel.
pub struct CorpusReader<N: TranscriptionNormalizer> {
    normalizer: N,
    speaker: Speaker,
}

impl<N: TranscriptionNormalizer> CorpusReader<N> {
    pub fn new(normalizer: N, speaker: Speaker) -> Self {
        Self {
            normalizer,
            speaker,
        }
    }

    /// Read every label file in order into one table.
    ///
    /// A session+speaker name seen twice keeps the later file's table.
    pub fn read_files(
        &self,
        label_paths: &[PathBuf],
        chars: &mut CharacterSet,
        pb: Option<&ProgressBar>,
    ) -> Result<SpeakerTable> {
        info!(
            "Reading {} label files for speaker {} with {}",
            label_paths.len(),
            self.speaker,
            self.normalizer.name()
        );

        let mut table = SpeakerTable::new();
        for path in label_paths {
            let (speaker_name, utterances) = self.read_file(path, chars)?;
            table.insert(speaker_name, utterances);
            if let Some(pb) = pb {
                pb.inc(1);
            }
        }

        Ok(table)
    }

    /// Read one label file, returning its speaker name and utterances.
    pub fn read_file(&self, path: &Path, chars: &mut CharacterSet) -> Result<(String, UtteranceTable)> {
        let file = File::open(path).map_err(|source| LabelError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;

        let speaker_name = format!("{}{}", session_name(path), self.speaker);
        let utterances = self.read_lines(BufReader::new(file), path, chars)?;

        debug!("{}: {} utterances", speaker_name, utterances.len());
        Ok((speaker_name, utterances))
    }

    /// Segment the lines of one session. `path` is only used in errors.
    pub fn read_lines<R: BufRead>(
        &self,
        reader: R,
        path: &Path,
        chars: &mut CharacterSet,
    ) -> Result<UtteranceTable> {
        let mut utterances = UtteranceTable::new();
        let mut skipped_empty = 0usize;

        for (line_index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LabelError::io(path, e))?;

            let segment = parse_line(&line).map_err(|reason| LabelError::MalformedLine {
                path: path.to_path_buf(),
                line: line_index + 1,
                reason,
            })?;

            let Some(segment) = segment else {
                continue;
            };

            if segment.speaker_tag != self.speaker.as_str() {
                continue;
            }

            let cleaned = self.normalizer.normalize(&segment.raw_transcript());
            if cleaned.is_empty() {
                skipped_empty += 1;
                continue;
            }

            // Merge silence around the utterance
            let transcript = format!("_{}_", cleaned).replace("__", "_");

            chars.observe(&transcript.to_lowercase());

            utterances.insert(
                utterance_key(utterances.len()),
                Utterance {
                    start_frame: segment.start_frame,
                    end_frame: segment.end_frame,
                    transcript,
                },
            );
        }

        if skipped_empty > 0 {
            debug!(
                "{}: skipped {} lines that were empty after cleaning",
                path.display(),
                skipped_empty
            );
        }

        Ok(utterances)
    }
}

/// File name up to its first `.`.
fn session_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or_default()
}
