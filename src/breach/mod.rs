// src/breach/mod.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::StatusCode;
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::models::{BatchBreachSummary, BreachResult, BreachStatus};

pub const CLIENT_USER_AGENT: &str = "QuickPwd-Password-Generator";

/// Default pause between batch requests, to stay polite to the range API.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited by breach service")]
    RateLimited,

    #[error("Breach service returned status {0}")]
    ServiceUnavailable(u16),
}

pub type Result<T> = std::result::Result<T, BreachError>;

impl BreachError {
    /// Message suitable for direct display; each failure class gets a
    /// distinct message.
    pub fn user_message(&self) -> &'static str {
        match self {
            BreachError::Network(_) => {
                "Network error - check your internet connection and try again."
            }
            BreachError::RateLimited => "Too many requests - please wait a moment and try again.",
            BreachError::ServiceUnavailable(_) => {
                "Breach checking service temporarily unavailable."
            }
        }
    }
}

/// Client for a Pwned-Passwords-style k-anonymity range API.
///
/// Only the first 5 hex characters of the SHA-1 digest ever leave the
/// process; suffix matching happens locally against the returned range.
pub struct BreachChecker {
    client: reqwest::Client,
    base_url: String,
    request_delay: Duration,
    seq: AtomicU64,
}

impl BreachChecker {
    pub fn new(base_url: impl Into<String>, request_delay: Duration) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            request_delay,
            seq: AtomicU64::new(0),
        }
    }

    /// Sequence number of the most recently issued check. Callers keep
    /// the seq of the check they care about and drop results whose seq
    /// is older, since in-flight requests are never aborted.
    pub fn latest_seq(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Check one password against the breach corpus.
    pub async fn check(&self, password: &str) -> Result<BreachResult> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        let digest = hash_password(password);
        let (prefix, suffix) = digest.split_at(5);

        let url = format!("{}/range/{}", self.base_url, prefix);
        log::debug!("Range query for prefix {}", prefix);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(BreachError::RateLimited);
        }
        if !status.is_success() {
            return Err(BreachError::ServiceUnavailable(status.as_u16()));
        }

        let body = response.text().await?;

        Ok(match scan_range(&body, suffix) {
            Some(count) => BreachResult {
                leaked: true,
                breach_count: count,
                status: BreachStatus::Leaked,
                seq,
            },
            None => BreachResult {
                leaked: false,
                breach_count: 0,
                status: BreachStatus::Safe,
                seq,
            },
        })
    }

    /// Check a batch of passwords sequentially with a fixed inter-request
    /// delay. Deliberately not concurrent: the delay is the backpressure
    /// policy toward the third-party service. A failure reports the whole
    /// batch as errored; items already checked stay counted.
    pub async fn check_batch(&self, passwords: &[String]) -> BatchBreachSummary {
        let mut summary = BatchBreachSummary {
            checked: 0,
            leaked_count: 0,
            total_breaches: 0,
            status: BreachStatus::Checking,
        };

        for (i, password) in passwords.iter().enumerate() {
            if i > 0 && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }

            match self.check(password).await {
                Ok(result) => {
                    summary.checked += 1;
                    if result.leaked {
                        summary.leaked_count += 1;
                        summary.total_breaches += result.breach_count;
                    }
                }
                Err(e) => {
                    log::error!("Batch breach check failed: {}", e);
                    summary.status = BreachStatus::Error;
                    return summary;
                }
            }
        }

        summary.status = if summary.leaked_count > 0 {
            BreachStatus::Leaked
        } else {
            BreachStatus::Safe
        };
        summary
    }
}

/// Uppercase hex SHA-1 of the UTF-8 password bytes.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Scan a `SUFFIX:COUNT` range body for an exact suffix match. Lines that
/// do not parse are skipped rather than aborting the scan.
pub fn scan_range(body: &str, suffix: &str) -> Option<u64> {
    for line in body.lines() {
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate.trim() == suffix {
            match count.trim().parse::<u64>() {
                Ok(count) => return Some(count),
                Err(_) => continue,
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};

    // SHA-1("password"), the canonical known-breached example.
    const PASSWORD_SHA1: &str = "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[test]
    fn hashes_render_as_uppercase_hex() {
        assert_eq!(hash_password("password"), PASSWORD_SHA1);
    }

    #[test]
    fn prefix_and_suffix_split_at_five() {
        let digest = hash_password("password");
        let (prefix, suffix) = digest.split_at(5);
        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, &PASSWORD_SHA1[5..]);
        assert_eq!(suffix.len(), 35);
    }

    #[test]
    fn scan_finds_matching_suffix() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\nABCDEF:42\r\n";
        assert_eq!(scan_range(body, "ABCDEF"), Some(42));
        assert_eq!(scan_range(body, "0018A45C4D1DEF81644B54AB7F969B88D65"), Some(1));
    }

    #[test]
    fn scan_without_match_returns_none() {
        let body = "AAAA:1\nBBBB:2\n";
        assert_eq!(scan_range(body, "CCCC"), None);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let body = "garbage-without-colon\nABCD:not-a-number\nABCD:7\n";
        assert_eq!(scan_range(body, "ABCD"), Some(7));
    }

    async fn spawn_stub(body: &'static str, status: u16) -> String {
        let server = HttpServer::new(move || {
            App::new().route(
                "/range/{prefix}",
                web::get().to(move |_prefix: web::Path<String>| async move {
                    let status = actix_web::http::StatusCode::from_u16(status).unwrap();
                    HttpResponse::build(status).body(body)
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stub server");

        let port = server.addrs()[0].port();
        actix_web::rt::spawn(server.run());
        format!("http://127.0.0.1:{}", port)
    }

    #[actix_web::test]
    async fn known_breached_password_reports_leak_count() {
        // Suffix of SHA-1("password") with a count, CRLF-delimited like
        // the real service.
        let base = spawn_stub(
            "0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:9545824\r\n",
            200,
        )
        .await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let result = checker.check("password").await.unwrap();
        assert!(result.leaked);
        assert_eq!(result.breach_count, 9545824);
        assert_eq!(result.status, BreachStatus::Leaked);
    }

    #[actix_web::test]
    async fn unmatched_suffix_reports_safe() {
        let base = spawn_stub("0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n", 200).await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let result = checker.check("password").await.unwrap();
        assert!(!result.leaked);
        assert_eq!(result.breach_count, 0);
        assert_eq!(result.status, BreachStatus::Safe);
    }

    #[actix_web::test]
    async fn batch_aggregates_leaks_and_totals() {
        let base = spawn_stub(
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:10\r\n",
            200,
        )
        .await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let passwords = vec!["password".to_string(); 5];
        let summary = checker.check_batch(&passwords).await;
        assert_eq!(summary.checked, 5);
        assert_eq!(summary.leaked_count, 5);
        assert_eq!(summary.total_breaches, 50);
        assert_eq!(summary.status, BreachStatus::Leaked);
    }

    #[actix_web::test]
    async fn rate_limit_maps_to_distinct_error() {
        let base = spawn_stub("", 429).await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let err = checker.check("password").await.unwrap_err();
        assert!(matches!(err, BreachError::RateLimited));
        assert!(err.user_message().contains("Too many requests"));
    }

    #[actix_web::test]
    async fn server_error_maps_to_service_unavailable() {
        let base = spawn_stub("", 503).await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let err = checker.check("password").await.unwrap_err();
        assert!(matches!(err, BreachError::ServiceUnavailable(503)));
    }

    #[actix_web::test]
    async fn batch_failure_reports_batch_level_error() {
        let base = spawn_stub("", 500).await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let passwords = vec!["password".to_string(); 3];
        let summary = checker.check_batch(&passwords).await;
        assert_eq!(summary.status, BreachStatus::Error);
        assert_eq!(summary.checked, 0);
    }

    #[actix_web::test]
    async fn seq_increments_per_check() {
        let base = spawn_stub("AAAA:1\n", 200).await;

        let checker = BreachChecker::new(base, Duration::ZERO);
        let first = checker.check("one").await.unwrap();
        let second = checker.check("two").await.unwrap();
        assert!(second.seq > first.seq);
        assert_eq!(checker.latest_seq(), second.seq);
    }
}
