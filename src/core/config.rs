// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::breach::DEFAULT_REQUEST_DELAY;

// Configuration for the password generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Breach checking
    pub breach_api_url: String,
    pub breach_request_delay: Duration,

    // Storage
    pub data_dir: Option<PathBuf>,

    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Web Interface
    pub api_port: u16,
    pub api_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breach_api_url: "https://api.pwnedpasswords.com".to_string(),
            breach_request_delay: DEFAULT_REQUEST_DELAY,

            data_dir: None, // Resolved in load()

            default_password_length: 16,
            min_password_length: 4,
            max_password_length: 128,

            api_port: 5000,
            api_address: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        config.data_dir = crate::utils::get_app_data_dir();

        if let Ok(url) = env::var("QUICKPWD_BREACH_API_URL") {
            config.breach_api_url = url;
        }

        if let Ok(val) = env::var("QUICKPWD_BREACH_DELAY_MS") {
            if let Ok(millis) = val.parse() {
                config.breach_request_delay = Duration::from_millis(millis);
            } else {
                log::warn!("Ignoring invalid QUICKPWD_BREACH_DELAY_MS '{}'", val);
            }
        }

        if let Ok(dir) = env::var("QUICKPWD_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(val) = env::var("QUICKPWD_API_PORT") {
            if let Ok(port) = val.parse() {
                config.api_port = port;
            }
        }

        if let Ok(address) = env::var("QUICKPWD_API_ADDRESS") {
            config.api_address = address;
        }

        config
    }

    pub fn store_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("quickpwd.json"))
    }
}
