// src/cli/menu.rs
use console::style;
use inquire::{CustomType, InquireError, MultiSelect, Select, Text};

use crate::cli::handlers::{validate_length, CliError};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, PasswordGenerationOptions};
use crate::utils::{copy_to_clipboard_with_timeout, display_password};

const GENERATE: &str = "🔑 Generate Password";
const COPY: &str = "📋 Copy to Clipboard";
const TOGGLE: &str = "👁  Show/Hide Password";
const SETTINGS: &str = "⚙️  Change Settings";
const EXIT: &str = "🚪 Exit";

// Form state of the interactive generator
#[derive(Debug, Clone)]
pub struct SessionState {
    pub options: PasswordGenerationOptions,
    pub password: Option<String>,
    pub visible: bool,
}

impl SessionState {
    pub fn new(options: PasswordGenerationOptions) -> Self {
        Self {
            options,
            password: None,
            visible: true,
        }
    }

    /// Replaces the current password. On error the previous one is kept.
    pub fn generate(&mut self) -> Result<&str, CliError> {
        validate_length(self.options.length)?;
        let password = PasswordGenerator::new().generate_password(&self.options)?;
        Ok(self.password.insert(password).as_str())
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn rendered_password(&self) -> Option<String> {
        self.password
            .as_deref()
            .map(|password| display_password(password, self.visible))
    }
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn show_password(state: &SessionState) {
    if let Some(rendered) = state.rendered_password() {
        println!("\n    {}\n", style(rendered).bold().cyan());
    }
}

fn edit_settings(options: &mut PasswordGenerationOptions) -> Result<(), InquireError> {
    options.length = CustomType::<usize>::new("Password Length:")
        .with_default(options.length)
        .with_error_message("Please type a whole number")
        .prompt()?;

    let labels: Vec<String> = CharacterClass::ALL
        .iter()
        .map(|class| format!("Include {}", class.label()))
        .collect();
    let selected: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| options.includes(**class))
        .map(|(i, _)| i)
        .collect();

    let chosen = MultiSelect::new("Character sets:", labels.clone())
        .with_default(&selected)
        .prompt()?;
    for (class, label) in CharacterClass::ALL.iter().zip(&labels) {
        options.set_included(*class, chosen.contains(label));
    }

    options.exclude_chars = Text::new("Exclude Characters (optional):")
        .with_initial_value(&options.exclude_chars)
        .prompt()?;

    Ok(())
}

pub fn run_interactive(config: &Config) -> Result<(), CliError> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🔐 PASSFORGE GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let mut state = SessionState::new(config.default_generation_options());

    loop {
        let choice = match Select::new("What would you like to do?", vec![GENERATE, COPY, TOGGLE, SETTINGS, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            GENERATE => match state.generate().map(|_| ()) {
                Ok(()) => show_password(&state),
                Err(e) => {
                    log::debug!("Generation rejected: {}", e);
                    eprintln!("{} {}", style("❌ Error:").red().bold(), e);
                }
            },
            COPY => match state.password.as_deref() {
                None => eprintln!("{}", style("⚠️  Generate a password first.").yellow()),
                Some(password) => match copy_to_clipboard_with_timeout(password, config.clipboard_clear_after) {
                    Ok(()) => {
                        log::info!("Copied generated password to clipboard");
                        println!("{}", style("✅ Password copied to clipboard!").green());
                        if let Some(delay) = config.clipboard_clear_after {
                            println!("   Clipboard will be cleared in {}s.", delay.as_secs());
                        }
                    }
                    Err(e) => eprintln!("{} {}", style("❌ Error:").red().bold(), e),
                },
            },
            TOGGLE => {
                let visible = state.toggle_visibility();
                println!("Password is now {}.", if visible { "visible" } else { "hidden" });
                show_password(&state);
            }
            SETTINGS => match edit_settings(&mut state.options) {
                Ok(()) => log::debug!("Updated generation options: {:?}", state.options),
                Err(e) if is_cancel(&e) => continue,
                Err(e) => return Err(e.into()),
            },
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_stores_password() {
        let mut state = SessionState::new(PasswordGenerationOptions::default());
        let generated = state.generate().unwrap().to_string();
        assert_eq!(generated.len(), 12);
        assert_eq!(state.password.as_deref(), Some(generated.as_str()));
    }

    #[test]
    fn test_failed_generation_keeps_previous_password() {
        let mut state = SessionState::new(PasswordGenerationOptions::default());
        let first = state.generate().unwrap().to_string();

        state.options.length = 3;
        assert!(matches!(state.generate(), Err(CliError::LengthTooShort { .. })));

        state.options.length = 8;
        state.options.exclude_chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789".to_string();
        assert!(state.generate().is_err());

        assert_eq!(state.password.as_deref(), Some(first.as_str()));
    }

    #[test]
    fn test_visibility_toggle_masks_output() {
        let mut state = SessionState::new(PasswordGenerationOptions::default());
        assert_eq!(state.rendered_password(), None);

        let password = state.generate().unwrap().to_string();
        assert_eq!(state.rendered_password(), Some(password.clone()));

        assert!(!state.toggle_visibility());
        let masked = state.rendered_password().unwrap();
        assert_eq!(masked.chars().count(), password.chars().count());
        assert_ne!(masked, password);

        assert!(state.toggle_visibility());
        assert_eq!(state.rendered_password(), Some(password));
    }
}
