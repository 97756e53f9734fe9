// src/utils/mod.rs
mod clipboard;
mod format;

pub use self::clipboard::*;
pub use self::format::*;
