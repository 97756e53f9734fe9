// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::GeneratorError;
use crate::models::PasswordGenerationOptions;

/// Assembles the character pool for `options`: selected alphabets in
/// uppercase, lowercase, digits, symbols order, minus every excluded
/// character. Exclusion is case-sensitive and ignores which class
/// contributed a character.
pub fn build_pool(options: &PasswordGenerationOptions) -> Result<Vec<char>, GeneratorError> {
    let classes = options.selected_classes();
    if classes.is_empty() {
        return Err(GeneratorError::InvalidSelection);
    }

    let mut pool: Vec<char> = classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect();

    if !options.exclude_chars.is_empty() {
        pool.retain(|c| !options.exclude_chars.contains(*c));
    }

    if pool.is_empty() {
        return Err(GeneratorError::EmptyPool);
    }

    Ok(pool)
}

/// Generates a password from the operating system's CSPRNG.
pub fn generate(
    length: usize,
    use_upper: bool,
    use_lower: bool,
    use_digits: bool,
    use_symbols: bool,
    exclude_chars: &str,
) -> Result<String, GeneratorError> {
    let options = PasswordGenerationOptions {
        length,
        include_uppercase: use_upper,
        include_lowercase: use_lower,
        include_numbers: use_digits,
        include_symbols: use_symbols,
        exclude_chars: exclude_chars.to_string(),
    };

    PasswordGenerator::new().generate_password(&options)
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String, GeneratorError> {
        self.generate_with_rng(options, &mut OsRng)
    }

    /// Draws `options.length` characters independently and uniformly from
    /// the pool. The rng must be cryptographically secure.
    pub fn generate_with_rng<R>(&self, options: &PasswordGenerationOptions, rng: &mut R) -> Result<String, GeneratorError>
    where
        R: RngCore + CryptoRng,
    {
        let pool = build_pool(options)?;
        let dist = Uniform::from(0..pool.len());

        let password: String = (0..options.length)
            .map(|_| pool[dist.sample(&mut *rng)])
            .collect();

        log::debug!(
            "Generated password of length {} from a pool of {} characters",
            options.length,
            pool.len()
        );

        Ok(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
