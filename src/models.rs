// src/models.rs
use uuid::Uuid;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub pronounceable: bool,
    pub bulk_count: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            pronounceable: false,
            bulk_count: 1,
        }
    }
}

impl GenerationOptions {
    pub fn has_any_category(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedPassword {
    pub fn new(text: String) -> Self {
        Self {
            text,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub password: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(password: &GeneratedPassword) -> Self {
        Self {
            id: Uuid::new_v4(),
            password: password.text.clone(),
            timestamp: password.timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BreachStatus {
    Checking,
    Safe,
    Leaked,
    Error,
}

// Result of a single breach check. Never persisted; `seq` lets callers
// discard responses superseded by a newer check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreachResult {
    pub leaked: bool,
    pub breach_count: u64,
    pub status: BreachStatus,
    pub seq: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchBreachSummary {
    pub checked: usize,
    pub leaked_count: usize,
    pub total_breaches: u64,
    pub status: BreachStatus,
}
