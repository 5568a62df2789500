//! Search operations returning pages of product records.

use serde_json::Value;

use crate::config;
use crate::encode::form_encode;
use crate::error::Result;
use crate::models::Product;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// Query interface for the service's search family.
///
/// All searches are paged; `page` defaults to 0. A search that matches
/// nothing -- or that the service rejects as malformed -- yields an empty
/// vec, never an error.
pub struct SearchQuery<'a> {
    transport: &'a Transport,
}

impl<'a> SearchQuery<'a> {
    /// Create a new `SearchQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Find products whose barcode starts with the given prefix.
    pub fn by_prefix(&self, prefix: &str, page: Option<u32>) -> Result<Vec<Product>> {
        let page = page.unwrap_or(config::DEFAULT_PAGE);
        let value = self.transport.get_json(&format!(
            "op={}&prefix={}&page={}",
            config::OP_BARCODE_PREFIX_SEARCH,
            prefix,
            page
        ))?;
        Ok(product_list(value))
    }

    /// Full-text product-name search.
    pub fn by_name(&self, name: &str, page: Option<u32>) -> Result<Vec<Product>> {
        let page = page.unwrap_or(config::DEFAULT_PAGE);
        let value = self.transport.get_json(&format!(
            "op={}&name={}&page={}",
            config::OP_PRODUCT_SEARCH,
            form_encode(name),
            page
        ))?;
        Ok(product_list(value))
    }

    /// Fuzzy product-name search.
    ///
    /// Same shape as [`by_name`](Self::by_name) but the service applies
    /// similarity matching instead of exact token matching.
    pub fn similar(&self, name: &str, page: Option<u32>) -> Result<Vec<Product>> {
        let page = page.unwrap_or(config::DEFAULT_PAGE);
        let value = self.transport.get_json(&format!(
            "op={}&name={}&page={}",
            config::OP_SIMILAR_PRODUCT_SEARCH,
            form_encode(name),
            page
        ))?;
        Ok(product_list(value))
    }

    /// Search within a category, optionally filtered by product name.
    pub fn by_category(
        &self,
        category: &str,
        name: Option<&str>,
        page: Option<u32>,
    ) -> Result<Vec<Product>> {
        let name = name.map(form_encode).unwrap_or_default();
        let page = page.unwrap_or(config::DEFAULT_PAGE);
        let value = self.transport.get_json(&format!(
            "op={}&category={}&name={}&page={}",
            config::OP_CATEGORY_SEARCH,
            category,
            name,
            page
        ))?;
        Ok(product_list(value))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Pull the `productlist` array out of a search response.
///
/// An absent or empty list -- including the empty container a rejected
/// request short-circuits to -- comes back as an empty vec.
fn product_list(value: Value) -> Vec<Product> {
    value
        .get("productlist")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| serde_json::from_value(e.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
