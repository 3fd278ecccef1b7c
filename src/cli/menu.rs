// src/cli/menu.rs
use inquire::{Confirm, CustomType, MultiSelect, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;

use crate::cli::handlers::print_batch_summary;
use crate::core::service::{PasswordService, ServiceError};
use crate::models::GenerationOptions;
use crate::utils::format_time_ago;

const CATEGORY_CHOICES: [&str; 4] = ["Uppercase", "Lowercase", "Numbers", "Symbols"];

pub async fn run_cli_menu(
    service: Arc<PasswordService>,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🔑 QUICKPWD MENU            ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        let choice = Select::new(
            "What would you like to do?",
            vec![
                "Generate passwords",
                "View history",
                "Check a password for breaches",
                "Export history",
                "Clear history",
                "Toggle dark mode",
                "Exit",
            ],
        )
        .prompt()?;

        match choice {
            "Generate passwords" => generate_interactive(&service).await?,
            "View history" => show_history(&service)?,
            "Check a password for breaches" => check_interactive(&service).await?,
            "Export history" => export_interactive(&service)?,
            "Clear history" => {
                if Confirm::new("Clear all password history?")
                    .with_default(false)
                    .prompt()?
                {
                    service.clear_history()?;
                    println!("{} Password history cleared", style("✓").green());
                }
            }
            "Toggle dark mode" => {
                let enabled = !service.dark_mode()?;
                service.set_dark_mode(enabled)?;
                println!(
                    "Dark mode is now {}",
                    if enabled { "on" } else { "off" }
                );
            }
            _ => break,
        }
    }

    Ok(())
}

async fn generate_interactive(service: &PasswordService) -> Result<(), Box<dyn Error>> {
    let length = CustomType::<usize>::new("Password length:")
        .with_default(service.default_password_length())
        .prompt()?;

    let pronounceable = Confirm::new("Pronounceable (syllable-based)?")
        .with_default(false)
        .prompt()?;

    let selected = MultiSelect::new("Character types:", CATEGORY_CHOICES.to_vec())
        .with_default(&[0, 1, 2, 3])
        .prompt()?;

    let count = CustomType::<usize>::new("How many passwords?")
        .with_default(1)
        .prompt()?;

    let check = Confirm::new("Check against known breaches?")
        .with_default(false)
        .prompt()?;

    let options = GenerationOptions {
        length,
        include_uppercase: selected.contains(&"Uppercase"),
        include_lowercase: selected.contains(&"Lowercase"),
        include_numbers: selected.contains(&"Numbers"),
        include_symbols: selected.contains(&"Symbols"),
        pronounceable,
        bulk_count: count,
    };

    let passwords = match service.generate(&options) {
        Ok(passwords) => passwords,
        Err(ServiceError::Generator(e)) => {
            println!("{} {}", style("✗").red(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for password in &passwords {
        println!("  {}", style(&password.text).bold());
    }

    if check {
        let texts: Vec<String> = passwords.iter().map(|p| p.text.clone()).collect();
        print_batch_summary(service, &texts).await;
    }

    Ok(())
}

fn show_history(service: &PasswordService) -> Result<(), Box<dyn Error>> {
    let entries = service.history()?;
    if entries.is_empty() {
        println!("No passwords generated yet");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "  {}  {}",
            entry.password,
            style(format_time_ago(entry.timestamp)).dim()
        );
    }
    Ok(())
}

async fn check_interactive(service: &PasswordService) -> Result<(), Box<dyn Error>> {
    let password = Text::new("Password to check:").prompt()?;
    match service.check_breach(&password).await {
        Ok(result) if result.leaked => println!(
            "{} Found in {} data breaches. Consider using a different password.",
            style("⚠").yellow(),
            result.breach_count
        ),
        Ok(_) => println!(
            "{} Not found in known data breaches.",
            style("✓").green()
        ),
        Err(ServiceError::Breach(e)) => println!("{} {}", style("⚠").yellow(), e.user_message()),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn export_interactive(service: &PasswordService) -> Result<(), Box<dyn Error>> {
    let format = Select::new("Export format:", vec!["csv", "txt"]).prompt()?;
    let path = Text::new("Output file:")
        .with_default(if format == "csv" {
            "password-history.csv"
        } else {
            "passwords.txt"
        })
        .prompt()?;

    let content = if format == "csv" {
        service.export_history_csv()?
    } else {
        service.export_history_text()?
    };

    std::fs::write(&path, content)?;
    println!("{} Exported history to {}", style("✓").green(), path);
    Ok(())
}
