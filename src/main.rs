use clap::Parser;
use colored::Colorize;

use focusflow::cli::args::{Cli, Commands, RunArgs};
use focusflow::cli::commands;
use focusflow::config::{Config, Paths};
use focusflow::error::FocusFlowError;
use focusflow::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusFlowError> {
    let cli = Cli::parse();
    let paths = Paths::new()?;

    // A broken config file must not block `config reset` or `completions`;
    // only the commands that read settings require it to parse.
    let loaded = Config::load_from_path(&paths.config_file);
    let general = loaded
        .as_ref()
        .map(|config| config.general.clone())
        .unwrap_or_default();
    let format = cli.output.unwrap_or(general.default_output);
    general.color.apply();

    let interactive = matches!(cli.command, None | Some(Commands::Run(_)));
    logging::init(&paths, interactive);
    if let Err(ref e) = loaded {
        tracing::warn!(error = %e, "config file could not be loaded");
    }

    let output = match cli.command {
        None => {
            focusflow::tui::run(&loaded?, RunArgs::default())?;
            String::new()
        }
        Some(Commands::Run(args)) => {
            focusflow::tui::run(&loaded?, args)?;
            String::new()
        }
        Some(Commands::Config(args)) => commands::config(&paths, args.command, format)?,
        Some(Commands::Simulate(args)) => commands::simulate(&loaded?, args, format)?,
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
