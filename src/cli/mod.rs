// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords from selectable character sets", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_has_no_command() {
        let args = Args::try_parse_from(["passforge"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_generate_flags_parse() {
        let args = Args::try_parse_from([
            "passforge", "generate", "-l", "20", "--symbols", "--no-lower", "-x", "Il1", "-n", "3", "--json",
        ])
        .unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate(generate)) => {
                assert_eq!(generate.length, Some(20));
                assert!(generate.symbols);
                assert!(generate.no_lower);
                assert_eq!(generate.exclude.as_deref(), Some("Il1"));
                assert_eq!(generate.count, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert!(Args::try_parse_from(["passforge", "generate", "-n", "0"]).is_err());

        let args = Args::try_parse_from(["passforge", "generate"]).unwrap();
        match args.command {
            Some(CliCommand::Generate(generate)) => assert_eq!(generate.count, 1),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_last_toggle_wins() {
        let args = Args::try_parse_from(["passforge", "generate", "--upper", "--no-upper"]).unwrap();
        match args.command {
            Some(CliCommand::Generate(generate)) => {
                assert!(!generate.upper);
                assert!(generate.no_upper);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
