//! Per-utterance label files.

pub mod npy;

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::corpus::SpeakerTable;
use crate::error::{LabelError, Result};
use crate::vocab::Vocabulary;

/// `<save_dir>/<speaker>/<speaker>_<index>.npy`
pub fn label_path(save_dir: &Path, speaker_name: &str, utt_index: &str) -> PathBuf {
    save_dir
        .join(speaker_name)
        .join(format!("{}_{}.npy", speaker_name, utt_index))
}

/// Encode every utterance and write one label file each.
///
/// Returns the number of files written.
pub fn save_labels(
    table: &SpeakerTable,
    vocab: &Vocabulary,
    save_dir: &Path,
    pb: Option<&ProgressBar>,
) -> Result<usize> {
    let mut written = 0;

    for (speaker_name, utterances) in table {
        let speaker_dir = save_dir.join(speaker_name);
        fs::create_dir_all(&speaker_dir).map_err(|e| LabelError::io(&speaker_dir, e))?;

        for (utt_index, utterance) in utterances {
            let labels = vocab.encode(&utterance.transcript)?;
            npy::write_int64(&label_path(save_dir, speaker_name, utt_index), &labels)?;
            written += 1;
        }

        if let Some(pb) = pb {
            pb.inc(1);
        }
    }

    info!("Saved {} label files to {:?}", written, save_dir);
    Ok(written)
}
