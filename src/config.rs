use std::time::Duration;

pub const API_BASE: &str = "https://api.ean-search.org/api";

/// Name of the response header carrying the remaining request credits.
pub const CREDITS_HEADER: &str = "X-Credits-Remaining";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Total request attempts per call when the service rate-limits (initial
/// attempt plus retries).
pub const MAX_ATTEMPTS: u32 = 3;

/// Fixed pause between rate-limited attempts.
pub const RETRY_PAUSE: Duration = Duration::from_secs(1);

pub const DEFAULT_LANGUAGE: u32 = 1;
pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_IMAGE_WIDTH: u32 = 102;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 50;

// Operation codes understood by the service.
pub const OP_BARCODE_LOOKUP: &str = "barcode-lookup";
pub const OP_UPC_LOOKUP: &str = "upc-lookup";
pub const OP_ISBN_LOOKUP: &str = "isbn-lookup";
pub const OP_BARCODE_PREFIX_SEARCH: &str = "barcode-prefix-search";
pub const OP_PRODUCT_SEARCH: &str = "product-search";
pub const OP_SIMILAR_PRODUCT_SEARCH: &str = "similar-product-search";
pub const OP_CATEGORY_SEARCH: &str = "category-search";
pub const OP_BARCODE_IMAGE: &str = "barcode-image";
pub const OP_VERIFY_CHECKSUM: &str = "verify-checksum";
pub const OP_ISSUING_COUNTRY: &str = "issuing-country";
