//! CLI handler for building the mapping file and label files.

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::{MakeCliArgs, OutputFormat};
use crate::config::Config;
use crate::discovery::find_label_files;
use crate::global;
use crate::pipeline::{read_transcripts, RunSummary};

pub fn handle_make_command(args: MakeCliArgs, config: &Config) -> Result<()> {
    let speaker = args.speaker.unwrap_or(config.corpus.default_speaker);

    let label_dirs: Vec<PathBuf> = if args.label_dirs.is_empty() {
        config.paths.label_dir.iter().cloned().collect()
    } else {
        args.label_dirs
    };
    if label_dirs.is_empty() {
        bail!("No label directory given. Pass --label-dir or set paths.label_dir in the config");
    }

    let mut label_paths = Vec::new();
    for dir in &label_dirs {
        let found = find_label_files(dir, &config.corpus.label_extension)
            .with_context(|| format!("Failed to list label files in {}", dir.display()))?;
        label_paths.extend(found);
    }
    if label_paths.is_empty() {
        bail!(
            "No .{} label files found in {:?}",
            config.corpus.label_extension,
            label_dirs
        );
    }

    let run_root = args
        .run_root
        .unwrap_or_else(|| config.paths.run_root.clone());
    let mapping_path = global::mapping_file(&run_root);
    let save_dir = args.save_dir.or_else(|| config.paths.save_dir.clone());

    let pb = if args.no_progress {
        None
    } else {
        Some(create_progress_bar()?)
    };

    let run = read_transcripts(
        &label_paths,
        speaker,
        &mapping_path,
        save_dir.as_deref(),
        pb.as_ref(),
    )?;

    if let Some(pb) = pb {
        pb.finish_with_message("Complete");
    }

    match args.format {
        OutputFormat::Text => println!("{}", format_summary(&run.summary)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&run.summary).context("Failed to serialize summary")?
        ),
    }

    Ok(())
}

/// Create a styled progress bar.
fn create_progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("━╸━"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn format_summary(summary: &RunSummary) -> String {
    let mut lines = vec![
        format!("Speaker:          {}", summary.speaker),
        format!("Label files:      {}", summary.label_files),
        format!("Speakers:         {}", summary.speakers),
        format!("Utterances:       {}", summary.utterances),
        format!("Vocabulary size:  {}", summary.vocabulary_size),
        format!("Mapping file:     {}", summary.mapping_path.display()),
    ];
    match &summary.save_dir {
        Some(dir) => lines.push(format!(
            "Labels written:   {} ({})",
            summary.labels_written,
            dir.display()
        )),
        None => lines.push("Labels written:   0 (no save directory)".to_string()),
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Speaker;

    #[test]
    fn test_format_summary() {
        let summary = RunSummary {
            speaker: Speaker::A,
            label_files: 2,
            speakers: 2,
            utterances: 5,
            vocabulary_size: 12,
            mapping_path: PathBuf::from("labels/ctc/fisher/char2num.txt"),
            save_dir: None,
            labels_written: 0,
        };

        let text = format_summary(&summary);
        assert!(text.contains("Speaker:          A"));
        assert!(text.contains("Utterances:       5"));
        assert!(text.ends_with("Labels written:   0 (no save directory)"));
    }
}
