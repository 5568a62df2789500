//! Single-barcode lookups: GTIN/EAN, UPC, and ISBN.

use serde_json::Value;

use crate::config;
use crate::error::Result;
use crate::models::Product;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// LookupQuery
// ---------------------------------------------------------------------------

/// Query interface for single-barcode product lookups.
pub struct LookupQuery<'a> {
    transport: &'a Transport,
}

impl<'a> LookupQuery<'a> {
    /// Create a new `LookupQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    // -- GTIN / EAN --------------------------------------------------------

    /// Look up a product by its GTIN/EAN barcode.
    ///
    /// `language` selects the preferred product-name language and defaults
    /// to 1 (English). Returns `None` when the service knows nothing about
    /// the barcode.
    pub fn gtin(&self, ean: &str, language: Option<u32>) -> Result<Option<Product>> {
        let language = language.unwrap_or(config::DEFAULT_LANGUAGE);
        let value = self.transport.get_json(&format!(
            "op={}&ean={}&language={}",
            config::OP_BARCODE_LOOKUP,
            ean,
            language
        ))?;
        Ok(first_product(value))
    }

    /// Alias for [`gtin`](Self::gtin) -- EAN and GTIN lookups are the same
    /// operation on the service side.
    pub fn ean(&self, ean: &str, language: Option<u32>) -> Result<Option<Product>> {
        self.gtin(ean, language)
    }

    // -- UPC ---------------------------------------------------------------

    /// Look up a product by its UPC barcode.
    pub fn upc(&self, upc: &str, language: Option<u32>) -> Result<Option<Product>> {
        let language = language.unwrap_or(config::DEFAULT_LANGUAGE);
        let value = self.transport.get_json(&format!(
            "op={}&upc={}&language={}",
            config::OP_UPC_LOOKUP,
            upc,
            language
        ))?;
        Ok(first_product(value))
    }

    // -- ISBN --------------------------------------------------------------

    /// Look up a book by ISBN and return its title.
    ///
    /// Returns `None` when the ISBN is unknown to the service.
    pub fn isbn(&self, isbn: &str) -> Result<Option<String>> {
        let value = self
            .transport
            .get_json(&format!("op={}&isbn={}", config::OP_ISBN_LOOKUP, isbn))?;
        Ok(first_product(value).and_then(|p| p.name))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map the first entry of a JSON result array into a product.
///
/// Returns `None` when the array is missing or empty, so callers never index
/// into an empty result.
fn first_product(value: Value) -> Option<Product> {
    match value {
        Value::Array(mut entries) if !entries.is_empty() => {
            serde_json::from_value(entries.swap_remove(0)).ok()
        }
        _ => None,
    }
}
