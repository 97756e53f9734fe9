// src/generators/mod.rs
use thiserror::Error;

pub mod password;

pub use password::{build_pool, generate, PasswordGenerator};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character set must be selected.")]
    InvalidSelection,

    #[error("Character pool is empty after exclusions.")]
    EmptyPool,
}
