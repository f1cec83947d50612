// src/cli/menu.rs
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use std::error::Error;
use std::path::PathBuf;

use crate::cli::handlers::{copy_and_report, styled_strength, write_export};
use crate::clipboard::Clipboard;
use crate::core::config::Config;
use crate::core::{rng_for, PasswordService};
use crate::generators::strength_feedback;
use crate::history::EXPORT_FILE_NAME;
use crate::models::GenerationPolicy;
use crate::utils::format_timestamp;

const GENERATE: &str = "🔐  Generate password";
const COPY_LAST: &str = "📋  Copy last password";
const HISTORY: &str = "🕘  Browse history";
const ANALYZE: &str = "🔍  Check a password";
const EXPORT: &str = "📤  Export history to CSV";
const CLEAR: &str = "🗑️  Clear history";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(
    service: &mut PasswordService,
    config: &Config,
    clipboard: &dyn Clipboard,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSFORGE GENERATOR       ║");
    println!("╚══════════════════════════════════════╝");

    let mut last_password: Option<String> = service.history().first().map(|e| e.password.clone());
    let mut policy = config.default_policy();

    loop {
        let options = vec![GENERATE, COPY_LAST, HISTORY, ANALYZE, EXPORT, CLEAR, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()?;

        match selection {
            Some(GENERATE) => {
                policy = prompt_policy(&policy, config.max_password_length)?;
                let mut rng = rng_for(None);
                match service.generate(&policy, &mut *rng, true) {
                    Ok(generated) => {
                        println!("\nGenerated Password: {}", generated.password);
                        println!("Strength: {}\n", styled_strength(&generated.strength));
                        last_password = Some(generated.password);
                    }
                    Err(e) => println!("❌ {}", e),
                }
            }
            Some(COPY_LAST) => match &last_password {
                Some(password) => {
                    copy_and_report(clipboard, password);
                }
                None => println!("Nothing to copy yet."),
            },
            Some(HISTORY) => {
                if service.history().is_empty() {
                    println!("No passwords generated yet.");
                    continue;
                }
                let labels: Vec<String> = service
                    .history()
                    .iter()
                    .map(|e| format!("{}  ({})", e.password, format_timestamp(e.timestamp)))
                    .collect();
                let Some(choice) = skippable(Select::new("Select a password:", labels).raw_prompt())? else {
                    continue;
                };
                let (entry, strength) = service.recall(choice.index)?;
                println!("\nPassword: {}", entry.password);
                println!("Strength: {}\n", styled_strength(&strength));
                last_password = Some(entry.password);
            }
            Some(ANALYZE) => {
                let password = Text::new("Password to check:").prompt()?;
                println!("Strength: {}", styled_strength(&service.analyze(&password)));
                for line in strength_feedback(&password) {
                    println!("  • {}", line);
                }
            }
            Some(EXPORT) => {
                let path = Text::new("Export to:").with_default(EXPORT_FILE_NAME).prompt()?;
                match write_export(&service.export_history(), &PathBuf::from(&path)) {
                    Ok(()) => println!("✅ Exported {} entries to {}", service.history().len(), path),
                    Err(e) => println!("❌ Export failed: {}", e),
                }
            }
            Some(CLEAR) => {
                let confirm = Confirm::new("Are you sure you want to clear the history?")
                    .with_default(false)
                    .prompt()?;
                if confirm {
                    service.clear_history()?;
                    println!("✅ History cleared");
                }
            }
            Some(EXIT) | None => break,
            Some(_) => {}
        }
    }

    println!("Goodbye!");
    Ok(())
}

// Esc cancels a prompt without ending the session.
fn skippable<T>(answer: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match answer {
        Ok(answer) => Ok(Some(answer)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(e),
    }
}

fn prompt_policy(previous: &GenerationPolicy, max_length: usize) -> Result<GenerationPolicy, Box<dyn Error + Send + Sync>> {
    let length: usize = CustomType::new("Password length:")
        .with_default(previous.length)
        .with_error_message("Please enter a whole number")
        .with_help_message(&format!("1 to {}", max_length))
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(previous.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(previous.include_lowercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(previous.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(previous.include_symbols)
        .prompt()?;

    let exclude_similar = Confirm::new("Exclude similar characters (like l, 1, I, O, 0)?")
        .with_default(previous.exclude_similar)
        .prompt()?;

    let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (like { } [ ] ( ) / \\)?")
        .with_default(previous.exclude_ambiguous)
        .prompt()?;

    Ok(GenerationPolicy {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
        exclude_similar,
        exclude_ambiguous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquire::list_option::ListOption;

    #[test]
    fn selection_keeps_the_chosen_position_for_identical_labels() {
        let label = "same  (1/1/2024, 9:00:00 AM)".to_string();
        let choice = skippable(Ok(ListOption::new(1, label))).unwrap().unwrap();
        assert_eq!(choice.index, 1);
    }

    #[test]
    fn cancelled_selection_is_skipped() {
        let answer: Result<ListOption<String>, _> = Err(InquireError::OperationCanceled);
        assert!(skippable(answer).unwrap().is_none());

        let answer: Result<ListOption<String>, _> = Err(InquireError::OperationInterrupted);
        assert!(skippable(answer).is_err());
    }
}
