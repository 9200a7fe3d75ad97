use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::corpus::Speaker;

#[derive(Parser, Debug)]
#[command(name = "fisher-labels")]
#[command(about = "Character-level CTC labels for the Fisher corpus", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Read transcripts, write the character mapping and save labels
    Make(MakeCliArgs),
    /// Print the cleaned form of transcript text
    Normalize(NormalizeCliArgs),
    /// Inspect the configuration
    Config(ConfigCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct MakeCliArgs {
    /// Speaker channel to extract (default: from config)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub speaker: Option<Speaker>,
    /// Directory searched recursively for label files (repeatable)
    #[arg(short, long = "label-dir")]
    pub label_dirs: Vec<PathBuf>,
    /// Directory for the .npy label files; labels are not saved without one
    #[arg(long)]
    pub save_dir: Option<PathBuf>,
    /// Root directory of labels/ctc/fisher/char2num.txt
    #[arg(long)]
    pub run_root: Option<PathBuf>,
    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,
    /// Summary output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    /// Transcript text; each stdin line is normalized when omitted
    pub text: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCliArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
