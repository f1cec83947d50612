// src/cli/handlers.rs
use console::{style, StyledObject};
use inquire::Confirm;
use serde_json::json;
use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::cli::commands::{GenerateArgs, HistoryCommand};
use crate::clipboard::Clipboard;
use crate::core::config::Config;
use crate::core::{rng_for, PasswordService, ServiceError};
use crate::generators::strength_feedback;
use crate::models::{StrengthScore, StrengthTier};
use crate::utils::{format_time_ago, format_timestamp, mask_password};

// Handlers for CLI commands

pub fn styled_strength(strength: &StrengthScore) -> StyledObject<String> {
    let text = format!("{}/100 ({})", strength.score, strength.tier);
    match strength.tier {
        StrengthTier::Weak => style(text).red(),
        StrengthTier::Moderate => style(text).yellow(),
        StrengthTier::Strong => style(text).green(),
    }
}

/// Copy and report; a clipboard failure never fails the command.
pub fn copy_and_report(clipboard: &dyn Clipboard, password: &str) -> bool {
    match clipboard.write_text(password) {
        Ok(()) => {
            println!("{}", style("📋 Copied!").green());
            true
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            eprintln!("❌ Failed to copy password: {}", e);
            false
        }
    }
}

pub fn handle_generate(
    service: &mut PasswordService,
    config: &Config,
    clipboard: &dyn Clipboard,
    args: &GenerateArgs,
    json_output: bool,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let policy = args.apply(config.default_policy());
    let mut rng = rng_for(args.seed);
    let generated = service.generate(&policy, &mut *rng, !args.no_history)?;

    let copied = args.copy && copy_and_report(clipboard, &generated.password);

    if json_output {
        println!(
            "{}",
            json!({
                "password": generated.password,
                "strength": generated.strength.score,
                "tier": generated.strength.tier,
                "color": generated.strength.tier.color(),
                "copied": copied,
            })
        );
    } else {
        println!("\nGenerated Password: {}", style(&generated.password).bold());
        println!("Strength: {}", styled_strength(&generated.strength));
    }

    Ok(())
}

pub fn handle_analyze(service: &PasswordService, password: &str, json_output: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let strength = service.analyze(password);
    let feedback = strength_feedback(password);

    if json_output {
        println!(
            "{}",
            json!({
                "strength": strength.score,
                "tier": strength.tier,
                "color": strength.tier.color(),
                "feedback": feedback,
            })
        );
    } else {
        println!("Strength: {}", styled_strength(&strength));
        for line in feedback {
            println!("  • {}", line);
        }
    }

    Ok(())
}

pub fn handle_history(
    service: &mut PasswordService,
    clipboard: &dyn Clipboard,
    action: &HistoryCommand,
    json_output: bool,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match action {
        HistoryCommand::List { masked } => {
            let entries = service.history();
            if json_output {
                println!("{}", serde_json::to_string_pretty(entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("No passwords generated yet.");
                return Ok(());
            }
            for (i, entry) in entries.iter().enumerate() {
                let shown = if *masked {
                    mask_password(&entry.password, 2)
                } else {
                    entry.password.clone()
                };
                println!(
                    "{:>2}. {}  {}",
                    i + 1,
                    shown,
                    style(format!("{} ({})", format_timestamp(entry.timestamp), format_time_ago(entry.timestamp))).dim()
                );
            }
        }
        HistoryCommand::Show { index } => {
            let (entry, strength) = service.recall(position(*index)?)?;
            if json_output {
                println!(
                    "{}",
                    json!({
                        "password": entry.password,
                        "timestamp": entry.timestamp,
                        "strength": strength.score,
                        "tier": strength.tier,
                    })
                );
            } else {
                println!("Password: {}", style(&entry.password).bold());
                println!("Generated: {}", format_timestamp(entry.timestamp));
                println!("Strength: {}", styled_strength(&strength));
            }
        }
        HistoryCommand::Copy { index } => {
            let (entry, _) = service.recall(position(*index)?)?;
            copy_and_report(clipboard, &entry.password);
        }
        HistoryCommand::Clear { yes } => {
            let confirmed = *yes
                || Confirm::new("Forget every remembered password?")
                    .with_default(false)
                    .prompt()?;
            if confirmed {
                service.clear_history()?;
                println!("✅ History cleared");
            }
        }
        HistoryCommand::Export { output } => {
            let count = service.history().len();
            write_export(&service.export_history(), output)?;
            if output.as_os_str() != "-" {
                println!("✅ Exported {} entries to {}", count, output.display());
            }
        }
    }

    Ok(())
}

pub fn write_export(csv: &[u8], output: &Path) -> std::io::Result<()> {
    if output.as_os_str() == "-" {
        let mut stdout = std::io::stdout();
        stdout.write_all(csv)?;
        stdout.write_all(b"\n")?;
        return stdout.flush();
    }
    std::fs::write(output, csv)?;
    log::info!("History exported to {}", output.display());
    Ok(())
}

// Entries are numbered from 1 for people
fn position(index: usize) -> Result<usize, ServiceError> {
    index.checked_sub(1).ok_or(ServiceError::UnknownEntry(index))
}
