// src/core/service.rs
use std::sync::{Arc, Mutex};
use std::time::Instant;

use thiserror::Error;

use crate::breach::{BreachChecker, BreachError};
use crate::core::config::Config;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::history::{HistoryError, HistoryStore};
use crate::models::{BatchBreachSummary, BreachResult, GeneratedPassword, GenerationOptions, HistoryEntry};
use crate::storage::{KvStore, StorageError};

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Generator(#[from] GeneratorError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Breach check error: {0}")]
    Breach(#[from] BreachError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal state error")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Facade over the generators, the history store and the breach client.
/// All entry points (HTTP API, CLI subcommands, interactive menu) go
/// through here so option validation happens in exactly one place.
pub struct PasswordService {
    config: Config,
    generator: Mutex<PasswordGenerator>,
    history: Mutex<HistoryStore>,
    breach: BreachChecker,
    store: Arc<dyn KvStore>,
    started: Instant,
}

impl PasswordService {
    pub fn new(config: Config, store: Arc<dyn KvStore>) -> Self {
        let history = HistoryStore::load(store.clone());
        let breach = BreachChecker::new(&config.breach_api_url, config.breach_request_delay);
        Self {
            config,
            generator: Mutex::new(PasswordGenerator::new()),
            history: Mutex::new(history),
            breach,
            store,
            started: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn default_password_length(&self) -> usize {
        self.config.default_password_length
    }

    fn validate(&self, options: &GenerationOptions) -> Result<()> {
        if options.length < self.config.min_password_length
            || options.length > self.config.max_password_length
        {
            return Err(GeneratorError::InvalidOptions(format!(
                "Password length must be between {} and {} characters",
                self.config.min_password_length, self.config.max_password_length
            ))
            .into());
        }
        if options.bulk_count < 1 {
            return Err(
                GeneratorError::InvalidOptions("Bulk count must be at least 1".to_string()).into(),
            );
        }
        if !options.pronounceable && !options.has_any_category() {
            return Err(GeneratorError::InvalidOptions(
                "Please select at least one character type".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Generate one or more passwords, record each in the history and
    /// persist the history once for the whole request.
    pub fn generate(&self, options: &GenerationOptions) -> Result<Vec<GeneratedPassword>> {
        self.validate(options)?;

        let texts = {
            let mut generator = self.generator.lock().map_err(|_| ServiceError::Poisoned)?;
            generator.create_password_set(options)?
        };

        let passwords: Vec<GeneratedPassword> =
            texts.into_iter().map(GeneratedPassword::new).collect();

        let mut history = self.history.lock().map_err(|_| ServiceError::Poisoned)?;
        for password in &passwords {
            history.record(password);
        }
        history.flush()?;

        Ok(passwords)
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        let history = self.history.lock().map_err(|_| ServiceError::Poisoned)?;
        Ok(history.recent().to_vec())
    }

    pub fn history_len(&self) -> Result<usize> {
        let history = self.history.lock().map_err(|_| ServiceError::Poisoned)?;
        Ok(history.len())
    }

    pub fn clear_history(&self) -> Result<()> {
        let mut history = self.history.lock().map_err(|_| ServiceError::Poisoned)?;
        history.clear();
        history.flush()?;
        Ok(())
    }

    pub fn export_history_csv(&self) -> Result<String> {
        let history = self.history.lock().map_err(|_| ServiceError::Poisoned)?;
        Ok(crate::utils::history_to_csv(history.recent()))
    }

    pub fn export_history_text(&self) -> Result<String> {
        let history = self.history.lock().map_err(|_| ServiceError::Poisoned)?;
        Ok(crate::utils::passwords_to_text(history.recent()))
    }

    pub async fn check_breach(&self, password: &str) -> Result<BreachResult> {
        Ok(self.breach.check(password).await?)
    }

    pub async fn check_breach_batch(&self, passwords: &[String]) -> BatchBreachSummary {
        self.breach.check_batch(passwords).await
    }

    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self
            .store
            .get(DARK_MODE_KEY)?
            .map_or(false, |value| value == "true"))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    fn service() -> PasswordService {
        PasswordService::new(Config::default(), Arc::new(MemoryKvStore::new()))
    }

    #[test]
    fn generate_records_history_in_request_order() {
        let svc = service();
        let options = GenerationOptions {
            bulk_count: 3,
            ..Default::default()
        };
        let passwords = svc.generate(&options).unwrap();
        assert_eq!(passwords.len(), 3);

        let history = svc.history().unwrap();
        assert_eq!(history.len(), 3);
        // Newest first: the last generated password sits at index 0.
        assert_eq!(history[0].password, passwords[2].text);
        assert_eq!(history[2].password, passwords[0].text);
    }

    #[test]
    fn out_of_range_length_is_rejected() {
        let svc = service();
        for length in [0, 3, 129] {
            let options = GenerationOptions {
                length,
                ..Default::default()
            };
            assert!(matches!(
                svc.generate(&options),
                Err(ServiceError::Generator(GeneratorError::InvalidOptions(_)))
            ));
        }
    }

    #[test]
    fn zero_bulk_count_is_rejected() {
        let svc = service();
        let options = GenerationOptions {
            bulk_count: 0,
            ..Default::default()
        };
        assert!(svc.generate(&options).is_err());
    }

    #[test]
    fn no_categories_rejected_unless_pronounceable() {
        let svc = service();
        let mut options = GenerationOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert!(svc.generate(&options).is_err());

        options.pronounceable = true;
        let passwords = svc.generate(&options).unwrap();
        assert_eq!(passwords.len(), 1);
        assert!(!passwords[0].text.is_empty());
    }

    #[test]
    fn clear_history_empties_store() {
        let svc = service();
        svc.generate(&GenerationOptions::default()).unwrap();
        assert_eq!(svc.history_len().unwrap(), 1);
        svc.clear_history().unwrap();
        assert_eq!(svc.history_len().unwrap(), 0);
    }

    #[test]
    fn dark_mode_round_trips() {
        let svc = service();
        assert!(!svc.dark_mode().unwrap());
        svc.set_dark_mode(true).unwrap();
        assert!(svc.dark_mode().unwrap());
        svc.set_dark_mode(false).unwrap();
        assert!(!svc.dark_mode().unwrap());
    }
}
