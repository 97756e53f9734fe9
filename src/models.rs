// src/models.rs
use serde::Serialize;

// Character classes a password pool can be assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Pool assembly order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase Letters",
            CharacterClass::Lowercase => "Lowercase Letters",
            CharacterClass::Digits => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_chars: String,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_chars: String::new(),
        }
    }
}

impl PasswordGenerationOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_included(&mut self, class: CharacterClass, included: bool) {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = included,
            CharacterClass::Lowercase => self.include_lowercase = included,
            CharacterClass::Digits => self.include_numbers = included,
            CharacterClass::Symbols => self.include_symbols = included,
        }
    }

    /// Selected classes in pool assembly order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

// Result of a generation request, shaped for --json output
#[derive(Debug, Serialize)]
pub struct PasswordGenerationResponse {
    pub success: bool,
    pub passwords: Vec<String>,
    pub options: Option<PasswordGenerationOptions>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 32);
        assert!(CharacterClass::Symbols
            .alphabet()
            .chars()
            .all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn default_options_match_form_defaults() {
        let options = PasswordGenerationOptions::default();
        assert_eq!(options.length, 12);
        assert_eq!(
            options.selected_classes(),
            vec![
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digits
            ]
        );
        assert!(options.exclude_chars.is_empty());
    }

    #[test]
    fn set_included_toggles_single_class() {
        let mut options = PasswordGenerationOptions::default();
        options.set_included(CharacterClass::Symbols, true);
        options.set_included(CharacterClass::Lowercase, false);
        assert!(options.include_symbols);
        assert!(!options.include_lowercase);
        assert!(options.include_uppercase);
    }
}
