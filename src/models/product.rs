use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product -- a single record from the service's result lists
// ---------------------------------------------------------------------------

/// A product record as reported by the lookup service.
///
/// The service controls the shape, so every field is optional and unknown
/// fields are ignored; schema drift on the service side never breaks
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The product's EAN/GTIN barcode.
    pub ean: Option<String>,
    /// Product name in the requested language.
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    /// Country/region of the barcode's manufacturer registration.
    pub issuing_country: Option<String>,
}
