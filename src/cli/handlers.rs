// src/cli/handlers.rs
use std::error::Error;
use std::sync::Arc;

use console::style;

use crate::cli::CliCommand;
use crate::core::service::{PasswordService, ServiceError};
use crate::models::{BreachStatus, GenerationOptions};
use crate::utils::format_time_ago;

pub async fn execute_command(
    command: CliCommand,
    service: Arc<PasswordService>,
) -> Result<(), Box<dyn Error>> {
    match command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            pronounceable,
            count,
            check,
        } => {
            let options = GenerationOptions {
                length,
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
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
                println!("{}", password.text);
            }

            if check {
                let texts: Vec<String> = passwords.iter().map(|p| p.text.clone()).collect();
                print_batch_summary(&service, &texts).await;
            }
        }

        CliCommand::History { limit } => {
            let entries = service.history()?;
            if entries.is_empty() {
                println!("No passwords generated yet");
                return Ok(());
            }
            for entry in entries.iter().take(limit) {
                println!(
                    "{}  {}",
                    entry.password,
                    style(format_time_ago(entry.timestamp)).dim()
                );
            }
        }

        CliCommand::ClearHistory => {
            service.clear_history()?;
            println!("{} Password history cleared", style("✓").green());
        }

        CliCommand::Export { format, output } => {
            let content = match format.as_str() {
                "csv" => service.export_history_csv()?,
                "txt" => service.export_history_text()?,
                other => {
                    println!("{} Unknown export format '{}' (use csv or txt)", style("✗").red(), other);
                    return Ok(());
                }
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("{} Exported history to {}", style("✓").green(), path.display());
                }
                None => print!("{}", content),
            }
        }

        CliCommand::Check { password } => {
            match service.check_breach(&password).await {
                Ok(result) if result.leaked => {
                    println!(
                        "{} This password has been found in {} data breaches. Consider using a different password.",
                        style("⚠").yellow(),
                        result.breach_count
                    );
                }
                Ok(_) => {
                    println!(
                        "{} This password has not been found in known data breaches.",
                        style("✓").green()
                    );
                }
                Err(ServiceError::Breach(e)) => {
                    println!("{} {}", style("⚠").yellow(), e.user_message());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

pub async fn print_batch_summary(service: &PasswordService, passwords: &[String]) {
    let summary = service.check_breach_batch(passwords).await;
    match summary.status {
        BreachStatus::Leaked => println!(
            "{} {} of {} passwords found in data breaches (total: {} breaches). Consider regenerating.",
            style("⚠").yellow(),
            summary.leaked_count,
            summary.checked,
            summary.total_breaches
        ),
        BreachStatus::Safe => println!(
            "{} All {} passwords are safe - not found in known data breaches.",
            style("✓").green(),
            summary.checked
        ),
        _ => println!(
            "{} Unable to check passwords against breaches. Please try again later.",
            style("⚠").yellow()
        ),
    }
}
