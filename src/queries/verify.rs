//! Checksum verification and issuing-country lookup.

use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// VerifyQuery
// ---------------------------------------------------------------------------

/// Query interface for barcode validity and registration metadata.
pub struct VerifyQuery<'a> {
    transport: &'a Transport,
}

impl<'a> VerifyQuery<'a> {
    /// Create a new `VerifyQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Verify a barcode's check digit.
    ///
    /// The service reports validity as a literal `"1"` on the first result
    /// entry; anything else, including an empty result, counts as invalid.
    pub fn checksum(&self, ean: &str) -> Result<bool> {
        let value = self
            .transport
            .get_json(&format!("op={}&ean={}", config::OP_VERIFY_CHECKSUM, ean))?;
        let valid = value
            .get(0)
            .and_then(|entry| entry.get("valid"))
            .and_then(Value::as_str)
            .map(|marker| marker == "1")
            .unwrap_or(false);
        Ok(valid)
    }

    /// Return the issuing country for a barcode's registration prefix.
    ///
    /// Returns `None` when the service has no registration data for the
    /// barcode.
    pub fn issuing_country(&self, ean: &str) -> Result<Option<String>> {
        let value = self
            .transport
            .get_json(&format!("op={}&ean={}", config::OP_ISSUING_COUNTRY, ean))?;
        Ok(value
            .get(0)
            .and_then(|entry| entry.get("issuingCountry"))
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}
