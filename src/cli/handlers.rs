// src/cli/handlers.rs
use console::style;
use std::time::Duration;
use thiserror::Error;

use crate::cli::GenerateArgs;
use crate::core::config::{Config, MIN_PASSWORD_LENGTH};
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{PasswordGenerationOptions, PasswordGenerationResponse};
use crate::utils::{copy_and_hold, display_password, ClipboardError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Password length must be at least {min} characters.")]
    LengthTooShort { min: usize },

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("--copy needs CLIPBOARD_CLEAR_SECONDS above 0 outside interactive mode; the clipboard empties when the process exits")]
    ClipboardHoldDisabled,

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Reject lengths the generator should never be asked for
pub fn validate_length(length: usize) -> Result<(), CliError> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(CliError::LengthTooShort { min: MIN_PASSWORD_LENGTH });
    }
    Ok(())
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

// Merge command line flags over the configured defaults
pub fn resolve_options(args: &GenerateArgs, config: &Config) -> PasswordGenerationOptions {
    let defaults = config.default_generation_options();
    PasswordGenerationOptions {
        length: args.length.unwrap_or(defaults.length),
        include_uppercase: toggle(args.upper, args.no_upper, defaults.include_uppercase),
        include_lowercase: toggle(args.lower, args.no_lower, defaults.include_lowercase),
        include_numbers: toggle(args.digits, args.no_digits, defaults.include_numbers),
        include_symbols: toggle(args.symbols, args.no_symbols, defaults.include_symbols),
        exclude_chars: args.exclude.clone().unwrap_or(defaults.exclude_chars),
    }
}

pub fn handle_generate(options: &PasswordGenerationOptions, count: usize) -> Result<Vec<String>, CliError> {
    validate_length(options.length)?;

    let generator = PasswordGenerator::new();
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generator.generate_password(options)?);
    }
    Ok(passwords)
}

// Shape a generation result for --json output, masking passwords when hidden
pub fn build_response(
    result: &Result<Vec<String>, CliError>,
    options: &PasswordGenerationOptions,
    hide: bool,
) -> PasswordGenerationResponse {
    match result {
        Ok(passwords) => PasswordGenerationResponse {
            success: true,
            passwords: passwords
                .iter()
                .map(|password| display_password(password, !hide))
                .collect(),
            options: Some(options.clone()),
            error: None,
        },
        Err(e) => PasswordGenerationResponse {
            success: false,
            passwords: Vec::new(),
            options: Some(options.clone()),
            error: Some(e.to_string()),
        },
    }
}

// How long a one-shot copy keeps the process (and the clipboard selection) alive
pub fn clipboard_hold(config: &Config) -> Result<Duration, CliError> {
    config.clipboard_clear_after.ok_or(CliError::ClipboardHoldDisabled)
}

// Message shown to the user for a failed command; JSON mode already carries it
pub fn failure_message(error: &CliError, json: bool) -> Option<String> {
    if json {
        None
    } else {
        Some(format!("{} {}", style("Error:").red().bold(), error))
    }
}

// Run the one-shot `generate` command and print its result
pub fn run_generate(args: &GenerateArgs, config: &Config, json: bool) -> Result<(), CliError> {
    let hold = if args.copy { Some(clipboard_hold(config)?) } else { None };

    let options = resolve_options(args, config);
    log::info!(
        "Generating {} password(s) of length {}",
        args.count,
        options.length
    );

    let result = handle_generate(&options, args.count);

    if json {
        let response = build_response(&result, &options, args.hide);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    let passwords = result?;

    if !json {
        for password in &passwords {
            println!("{}", display_password(password, !args.hide));
        }
    }

    if let Some(hold) = hold {
        eprintln!(
            "{}",
            style(format!(
                "Copying password to clipboard; it will be cleared in {}s (Ctrl+C to stop early)...",
                hold.as_secs()
            ))
            .green()
        );
        copy_and_hold(&passwords.join("\n"), hold)?;
        log::info!("Clipboard hold finished");
        eprintln!("Clipboard cleared.");
    }

    Ok(())
}
