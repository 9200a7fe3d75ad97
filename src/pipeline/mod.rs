//! End-to-end label preparation: read, build the vocabulary, save labels.

use indicatif::ProgressBar;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::corpus::{CharacterSet, CorpusReader, Speaker, SpeakerTable};
use crate::error::Result;
use crate::labels::save_labels;
use crate::normalizer::FisherNormalizer;
use crate::vocab::Vocabulary;

/// Counts describing one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub speaker: Speaker,
    pub label_files: usize,
    pub speakers: usize,
    pub utterances: usize,
    pub vocabulary_size: usize,
    pub mapping_path: PathBuf,
    pub save_dir: Option<PathBuf>,
    pub labels_written: usize,
}

#[derive(Debug)]
pub struct LabelRun {
    pub table: SpeakerTable,
    pub summary: RunSummary,
}

/// Read transcripts for `speaker`, rewrite the mapping file at `mapping_path`
/// and, when `save_dir` is given, save one label file per utterance.
pub fn read_transcripts(
    label_paths: &[PathBuf],
    speaker: Speaker,
    mapping_path: &Path,
    save_dir: Option<&Path>,
    pb: Option<&ProgressBar>,
) -> Result<LabelRun> {
    info!("Reading target labels...");
    if let Some(pb) = pb {
        pb.set_length(label_paths.len() as u64);
        pb.set_position(0);
        pb.set_message("Reading transcripts");
    }

    let reader = CorpusReader::new(FisherNormalizer::new()?, speaker);
    let mut chars = CharacterSet::new();
    let table = reader.read_files(label_paths, &mut chars, pb)?;

    chars.inject_reserved();
    Vocabulary::from_charset(&chars).write(mapping_path)?;

    let utterances: usize = table.values().map(|u| u.len()).sum();
    info!(
        "Read {} utterances from {} speakers",
        utterances,
        table.len()
    );

    let labels_written = match save_dir {
        Some(save_dir) => {
            info!("Saving target labels...");
            if let Some(pb) = pb {
                pb.set_length(table.len() as u64);
                pb.set_position(0);
                pb.set_message("Saving labels");
            }
            let vocab = Vocabulary::load(mapping_path)?;
            save_labels(&table, &vocab, save_dir, pb)?
        }
        None => 0,
    };

    let summary = RunSummary {
        speaker,
        label_files: label_paths.len(),
        speakers: table.len(),
        utterances,
        vocabulary_size: chars.len(),
        mapping_path: mapping_path.to_path_buf(),
        save_dir: save_dir.map(Path::to_path_buf),
        labels_written,
    };

    Ok(LabelRun { table, summary })
}
