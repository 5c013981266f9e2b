// src/checker/http.rs
// =============================================================================
// This module checks if external URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes an HTTP HEAD request first (lightweight, no body download)
// - Falls back to GET when HEAD answers with a status >= 400, because some
//   servers reject HEAD but serve GET
// - Network-level failures (timeout, refused connection) are final; only
//   HTTP-level failure statuses trigger the GET fallback
//
// The HTTP client is built once per run from an HttpConfig and owned by the
// ExternalChecker value, which the pipeline passes explicitly to every check.
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E> and ?: The probe bails out on the first transport error
// - Clone on Client: cheap, it is a reference-counted handle
// =============================================================================

use reqwest::{redirect, Client, StatusCode};
use tracing::debug;
use url::Url;

use super::classify::Category;
use super::outcome::ValidationOutcome;
use crate::config::HttpConfig;
use crate::error::ValidateError;

// Performs the HEAD-then-GET existence probe for external links
#[derive(Debug, Clone)]
pub struct ExternalChecker {
    client: Client,
}

impl ExternalChecker {
    // Builds the shared client: fixed User-Agent, per-request timeout and a
    // bounded redirect-following policy
    pub fn new(config: &HttpConfig) -> Result<Self, ValidateError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    // Checks a single URL and never fails: every problem becomes an invalid
    // outcome with a reason describing it
    //
    // Reasons:
    //   "HTTP 200"        HEAD succeeded
    //   "HTTP 200 (GET)"  HEAD failed with a status, GET succeeded
    //   "HTTP 404"        both failed, final status
    //   "Timeout" / "Connection error" / "Request error: ..."
    pub async fn check(&self, url: &str) -> ValidationOutcome {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                return ValidationOutcome::invalid(
                    Category::External,
                    format!("Request error: invalid URL: {}", e),
                )
            }
        };

        match self.probe(parsed).await {
            Ok(outcome) => outcome,
            Err(e) => categorize_error(&e),
        }
    }

    async fn probe(&self, url: Url) -> Result<ValidationOutcome, reqwest::Error> {
        // Only the status matters; responses are dropped without reading a body
        let head = self.client.head(url.clone()).send().await?.status();
        if is_success(head) {
            return Ok(ValidationOutcome::valid(
                Category::External,
                format!("HTTP {}", head.as_u16()),
            ));
        }

        debug!(%url, status = head.as_u16(), "HEAD rejected, retrying with GET");

        let get = self.client.get(url).send().await?.status();
        if is_success(get) {
            Ok(ValidationOutcome::valid(
                Category::External,
                format!("HTTP {} (GET)", get.as_u16()),
            ))
        } else {
            Ok(ValidationOutcome::invalid(
                Category::External,
                format!("HTTP {}", get.as_u16()),
            ))
        }
    }
}

// Anything below 400 counts, redirects that were not followed included
fn is_success(status: StatusCode) -> bool {
    status.as_u16() < 400
}

// Maps a transport-level reqwest error onto a reason string
fn categorize_error(error: &reqwest::Error) -> ValidationOutcome {
    let reason = if error.is_timeout() {
        "Timeout".to_string()
    } else if error.is_connect() {
        "Connection error".to_string()
    } else {
        format!("Request error: {}", error)
    };

    ValidationOutcome::invalid(Category::External, reason)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HEAD first?
//    - HEAD asks for the headers only, so no page body is downloaded
//    - Most servers answer HEAD exactly like GET, just without the body
//    - A few servers answer HEAD with 405 or 500, which is why GET is retried
//
// 2. Why is a timeout not retried with GET?
//    - A timeout or refused connection says nothing about HEAD support
//    - Retrying would double the wait on a dead host for no new information
//
// 3. What does `?` do inside probe()?
//    - If send() fails, the error is returned from probe() immediately
//    - check() then turns that error into an invalid outcome
// -----------------------------------------------------------------------------
