// src/lib.rs
pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::generators::{generate, GeneratorError, PasswordGenerator};
pub use crate::models::{CharacterClass, PasswordGenerationOptions};
