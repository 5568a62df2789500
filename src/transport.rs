//! Blocking HTTP dispatch with bounded rate-limit retry.
//!
//! Builds the full request URL from the fixed endpoint, the access token, and
//! an operation query, issues a blocking GET, retries rate-limited attempts a
//! fixed number of times with a fixed pause, and captures the usage-credits
//! header from successful responses.

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config;
use crate::error::Result;

/// Response format requested from the service.
///
/// Everything except the barcode image operation speaks JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Xml,
}

impl Format {
    fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

/// Owns the blocking HTTP client and the per-instance request state.
///
/// The credits counter is advisory: it reflects the most recent successful
/// response's header value and is never enforced client-side. Interior
/// mutability keeps the query interfaces borrow-only; the type is not meant
/// to be shared across threads.
#[derive(Debug)]
pub struct Transport {
    http: Client,
    base_url: String,
    token: String,
    timeout: Cell<Duration>,
    credits: Cell<Option<i64>>,
}

impl Transport {
    pub(crate) fn new(token: String, base_url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            http,
            base_url,
            token,
            timeout: Cell::new(timeout),
            credits: Cell::new(None),
        })
    }

    /// Change the request timeout for subsequent calls.
    ///
    /// The timeout is applied per request, so in-flight calls are unaffected.
    pub fn set_timeout(&self, timeout: Duration) {
        self.timeout.set(timeout);
    }

    /// The currently configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout.get()
    }

    /// The endpoint requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Remaining request credits as last reported by the service.
    ///
    /// `None` until a response has carried the credits header.
    pub fn credits_remaining(&self) -> Option<i64> {
        self.credits.get()
    }

    /// Dispatch an operation and decode the JSON body.
    ///
    /// A 400 response short-circuits to an empty array without touching the
    /// body; the query layer reads that as "no results". Any other status
    /// falls through to the decoder, so the caller-level method interprets
    /// failure from the decoded body's shape.
    pub(crate) fn get_json(&self, op_query: &str) -> Result<Value> {
        let url = self.url_for(Format::Json, op_query);
        let resp = self.send(&url)?;

        if resp.status() == StatusCode::BAD_REQUEST {
            warn!(query = op_query, "service rejected request as malformed");
            return Ok(Value::Array(Vec::new()));
        }
        self.record_credits(&resp);

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Dispatch an operation and return the raw body undecoded.
    ///
    /// Used by the image operation, which answers in XML. Returns `None` on
    /// a 400 response, mirroring [`get_json`](Self::get_json).
    pub(crate) fn get_raw(&self, format: Format, op_query: &str) -> Result<Option<String>> {
        let url = self.url_for(format, op_query);
        let resp = self.send(&url)?;

        if resp.status() == StatusCode::BAD_REQUEST {
            warn!(query = op_query, "service rejected request as malformed");
            return Ok(None);
        }
        self.record_credits(&resp);

        Ok(Some(resp.text()?))
    }

    /// Issue a GET, retrying rate-limited attempts up to the fixed ceiling.
    ///
    /// Only 429 is retried -- it is the one transient, caller-unfixable
    /// condition the service signals. The pause is a fixed interval, not
    /// exponential backoff, and once the ceiling is reached the final
    /// attempt's response is returned unchanged.
    fn send(&self, url: &str) -> Result<Response> {
        let mut attempt = 1;
        loop {
            let resp = self.http.get(url).timeout(self.timeout.get()).send()?;
            if resp.status() == StatusCode::TOO_MANY_REQUESTS && attempt < config::MAX_ATTEMPTS {
                debug!(attempt, "rate limited by service; pausing before retry");
                thread::sleep(config::RETRY_PAUSE);
                attempt += 1;
                continue;
            }
            return Ok(resp);
        }
    }

    fn url_for(&self, format: Format, op_query: &str) -> String {
        format!(
            "{}?format={}&token={}&{}",
            self.base_url,
            format.as_str(),
            self.token,
            op_query
        )
    }

    /// Record the usage-credits header, when present and well-formed.
    fn record_credits(&self, resp: &Response) {
        if let Some(credits) = resp
            .headers()
            .get(config::CREDITS_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i64>().ok())
        {
            debug!(credits, "service reported remaining credits");
            self.credits.set(Some(credits));
        }
    }
}
