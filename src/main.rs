use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use passforge::cli::handlers::{failure_message, run_generate};
use passforge::cli::menu::run_interactive;
use passforge::cli::{Args, CliCommand, GenerateArgs};
use passforge::core::config::Config;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run(args: Args, config: &Config) -> anyhow::Result<bool> {
    let json = args.json;
    let result = match args.command {
        Some(CliCommand::Interactive) => run_interactive(config),
        Some(CliCommand::Generate(generate)) => run_generate(&generate, config, json),
        None => run_generate(&GenerateArgs::default(), config, json),
    };

    match result {
        Ok(()) => Ok(true),
        Err(e) => {
            log::debug!("Command failed: {}", e);
            if let Some(message) = failure_message(&e, json) {
                eprintln!("{}", message);
            }
            Ok(false)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    init_logging(&config)?;

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    if run(args, &config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
