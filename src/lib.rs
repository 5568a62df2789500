//! Barcode lookup SDK for Rust.
//!
//! Provides a high-level blocking client for the EAN-Search barcode API:
//! product lookup by EAN/GTIN, UPC, and ISBN, prefix/name/category search,
//! checksum verification, issuing-country lookup, and barcode image
//! retrieval.
//!
//! # Quick start
//!
//! ```no_run
//! use barcode_lookup_sdk::BarcodeLookupSdk;
//!
//! let sdk = BarcodeLookupSdk::new("my-api-token").unwrap();
//!
//! // Look up a product by its EAN
//! let product = sdk.lookup().gtin("5099750442227", None).unwrap();
//!
//! // Full-text search
//! let hits = sdk.search().by_name("bluetooth speaker", None).unwrap();
//! # let _ = (product, hits);
//! ```

pub mod config;
pub mod encode;
pub mod error;
pub mod models;
pub mod queries;
pub mod transport;

pub use error::{BarcodeLookupError, Result};
pub use models::Product;
pub use transport::Transport;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// BarcodeLookupSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BarcodeLookupSdk`] instance.
///
/// Use [`BarcodeLookupSdk::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](BarcodeLookupSdkBuilder::build)
/// to create the SDK.
pub struct BarcodeLookupSdkBuilder {
    token: String,
    base_url: String,
    timeout: Duration,
}

impl BarcodeLookupSdkBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }

    /// Override the service endpoint.
    ///
    /// Intended for tests and proxies; defaults to the public API base.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 180 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, initializing the HTTP client.
    ///
    /// No request is issued eagerly; the token is only validated for
    /// non-emptiness here and otherwise treated as opaque.
    pub fn build(self) -> Result<BarcodeLookupSdk> {
        if self.token.is_empty() {
            return Err(BarcodeLookupError::InvalidArgument(
                "access token must not be empty".to_string(),
            ));
        }
        let transport = Transport::new(self.token, self.base_url, self.timeout)?;
        Ok(BarcodeLookupSdk { transport })
    }
}

// ---------------------------------------------------------------------------
// BarcodeLookupSdk
// ---------------------------------------------------------------------------

/// The main entry point for the barcode lookup SDK.
///
/// Wraps a [`Transport`] (which owns the blocking HTTP client and the
/// per-instance token, timeout, and credits state) and exposes the service's
/// operations as lightweight borrowing query interfaces.
///
/// Created via [`BarcodeLookupSdk::new()`] or [`BarcodeLookupSdk::builder()`].
#[derive(Debug)]
pub struct BarcodeLookupSdk {
    transport: Transport,
}

impl BarcodeLookupSdk {
    /// Create an SDK with default settings for the given access token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a new builder for configuring the SDK.
    pub fn builder(token: impl Into<String>) -> BarcodeLookupSdkBuilder {
        BarcodeLookupSdkBuilder::new(token)
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the single-barcode lookup interface.
    ///
    /// Returns a lightweight wrapper that borrows from the underlying
    /// transport and provides GTIN/EAN, UPC, and ISBN lookups.
    pub fn lookup(&self) -> queries::LookupQuery<'_> {
        queries::LookupQuery::new(&self.transport)
    }

    /// Access the search interface (prefix, name, similarity, category).
    pub fn search(&self) -> queries::SearchQuery<'_> {
        queries::SearchQuery::new(&self.transport)
    }

    /// Access the checksum and issuing-country interface.
    pub fn verify(&self) -> queries::VerifyQuery<'_> {
        queries::VerifyQuery::new(&self.transport)
    }

    /// Access the barcode image interface.
    pub fn images(&self) -> queries::ImageQuery<'_> {
        queries::ImageQuery::new(&self.transport)
    }

    // -- Metadata and utility methods --------------------------------------

    /// Remaining request credits as last reported by the service.
    ///
    /// The counter is advisory and updated from the credits header of each
    /// successful response; it is `None` until the first such response.
    pub fn credits_remaining(&self) -> Option<i64> {
        self.transport.credits_remaining()
    }

    /// Change the HTTP request timeout for subsequent calls.
    pub fn set_timeout(&self, timeout: Duration) {
        self.transport.set_timeout(timeout);
    }

    /// Return a reference to the underlying [`Transport`] for advanced usage.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for BarcodeLookupSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BarcodeLookupSdk(base_url={}, timeout={:?}, credits={:?})",
            self.transport.base_url(),
            self.transport.timeout(),
            self.transport.credits_remaining()
        )
    }
}
