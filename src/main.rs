use anyhow::Result;
use clap::Parser;
use fisher_labels::cli::{
    handle_config_command, handle_make_command, handle_normalize_command, load_config, Cli,
    CliCommand,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        CliCommand::Version => {
            println!("fisher-labels {}", env!("CARGO_PKG_VERSION"));
        }
        CliCommand::Normalize(args) => {
            handle_normalize_command(args)?;
        }
        CliCommand::Make(args) => {
            let config = load_config(cli.config.as_deref())?;
            handle_make_command(args, &config)?;
        }
        CliCommand::Config(args) => {
            let config = load_config(cli.config.as_deref())?;
            handle_config_command(args, &config, cli.config.as_deref())?;
        }
    }

    Ok(())
}
