// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{BatchBreachSummary, BreachResult};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Desired password length (default: 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Compose from pronounceable syllables instead of random draws
    pub pronounceable: Option<bool>,
    /// Number of passwords to generate (default: 1)
    pub bulk_count: Option<usize>,
    /// Also run each password through the breach check
    pub check_breaches: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated passwords, in request order
    pub passwords: Vec<String>,
    /// Breach summary when check_breaches was requested
    pub breach: Option<BatchBreachSummary>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryInfo {
    /// Stable entry identifier
    pub id: String,
    /// The generated password
    pub password: String,
    /// Generation time, RFC 3339
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// History entries, newest first
    pub entries: Vec<HistoryEntryInfo>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BreachCheckRequest {
    /// Password to check against the breach corpus
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BreachCheckResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Check outcome (only present on success)
    pub result: Option<BreachResult>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BatchBreachRequest {
    /// Passwords to check, in order
    pub passwords: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BatchBreachResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Aggregate results for the batch
    pub summary: Option<BatchBreachSummary>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DarkModeRequest {
    /// Whether dark mode should be enabled
    pub dark_mode: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DarkModeResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Current dark mode preference
    pub dark_mode: bool,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemStatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Crate version
    pub version: String,
    /// Seconds since the service started
    pub uptime_seconds: u64,
    /// Number of entries currently in the history
    pub history_entries: usize,
}
