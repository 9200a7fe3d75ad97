//! CLI handler for inspecting transcript cleaning.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

use crate::cli::args::NormalizeCliArgs;
use crate::normalizer::{FisherNormalizer, TranscriptionNormalizer};

pub fn handle_normalize_command(args: NormalizeCliArgs) -> Result<()> {
    let normalizer = FisherNormalizer::new()?;

    match args.text {
        Some(text) => println!("{}", normalize_line(&normalizer, &text)),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                println!("{}", normalize_line(&normalizer, &line));
            }
        }
    }

    Ok(())
}

/// Lowercase then clean, as the corpus reader does.
fn normalize_line(normalizer: &impl TranscriptionNormalizer, text: &str) -> String {
    normalizer.normalize(&text.to_lowercase())
}
