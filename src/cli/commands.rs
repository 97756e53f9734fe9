// src/cli/commands.rs
use clap::builder::RangedU64ValueParser;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords and print them
    Generate(GenerateArgs),

    /// Open the interactive generator form
    Interactive,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (at least 4)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_upper")]
    pub upper: bool,

    /// Leave out uppercase letters
    #[arg(long, overrides_with = "upper")]
    pub no_upper: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lower")]
    pub lower: bool,

    /// Leave out lowercase letters
    #[arg(long, overrides_with = "lower")]
    pub no_lower: bool,

    /// Include numbers
    #[arg(long, overrides_with = "no_digits")]
    pub digits: bool,

    /// Leave out numbers
    #[arg(long, overrides_with = "digits")]
    pub no_digits: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Characters to remove from the pool
    #[arg(long, short = 'x')]
    pub exclude: Option<String>,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub count: usize,

    /// Copy the generated password to the clipboard
    #[arg(long, short)]
    pub copy: bool,

    /// Print the password masked
    #[arg(long)]
    pub hide: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: None,
            upper: false,
            no_upper: false,
            lower: false,
            no_lower: false,
            digits: false,
            no_digits: false,
            symbols: false,
            no_symbols: false,
            exclude: None,
            count: 1,
            copy: false,
            hide: false,
        }
    }
}
