//! Search query integration tests against the scripted mock service.

mod common;

use common::{MockApi, Scripted};
use serde_json::json;

// ---------------------------------------------------------------------------
// by_name
// ---------------------------------------------------------------------------

#[test]
fn by_name_returns_product_list() {
    let api = MockApi::start(vec![Scripted::json(json!({
        "productlist": [
            {"ean": "0885909950805", "name": "iPhone Charger"},
            {"ean": "0885909950812", "name": "iPhone Case"}
        ],
        "page": 0,
        "moreproducts": false
    }))]);
    let sdk = common::sdk_for(&api);

    let products = sdk.search().by_name("iphone", None).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name.as_deref(), Some("iPhone Charger"));
    assert_eq!(products[1].ean.as_deref(), Some("0885909950812"));
}

#[test]
fn by_name_returns_empty_vec_for_empty_list() {
    let api = MockApi::start(vec![Scripted::json(json!({"productlist": []}))]);
    let sdk = common::sdk_for(&api);

    assert!(sdk.search().by_name("no such product", None).unwrap().is_empty());
}

#[test]
fn by_name_returns_empty_vec_when_list_absent() {
    let api = MockApi::start(vec![Scripted::json(json!({"error": "expired token"}))]);
    let sdk = common::sdk_for(&api);

    assert!(sdk.search().by_name("anything", None).unwrap().is_empty());
}

#[test]
fn by_name_encodes_spaces_and_punctuation() {
    let api = MockApi::start(vec![Scripted::json(json!({"productlist": []}))]);
    let sdk = common::sdk_for(&api);

    sdk.search().by_name("café table", None).unwrap();

    let requests = api.requests();
    assert_eq!(
        requests[0],
        "format=json&token=test-token&op=product-search&name=caf%C3%A9+table&page=0"
    );
}

#[test]
fn by_name_passes_explicit_page() {
    let api = MockApi::start(vec![Scripted::json(json!({"productlist": []}))]);
    let sdk = common::sdk_for(&api);

    sdk.search().by_name("iphone 16", Some(3)).unwrap();

    let requests = api.requests();
    assert!(
        requests[0].contains("name=iphone+16&page=3"),
        "query: {}",
        requests[0]
    );
}

// ---------------------------------------------------------------------------
// similar
// ---------------------------------------------------------------------------

#[test]
fn similar_uses_fuzzy_operation() {
    let api = MockApi::start(vec![Scripted::json(json!({
        "productlist": [{"ean": "1", "name": "Close Enough"}]
    }))]);
    let sdk = common::sdk_for(&api);

    let products = sdk.search().similar("close enuff", None).unwrap();
    assert_eq!(products.len(), 1);
    assert!(api.requests()[0].contains("op=similar-product-search&name=close+enuff"));
}

// ---------------------------------------------------------------------------
// by_prefix
// ---------------------------------------------------------------------------

#[test]
fn by_prefix_returns_products_and_defaults_page() {
    let api = MockApi::start(vec![Scripted::json(json!({
        "productlist": [
            {"ean": "4006381000001", "name": "Pen"},
            {"ean": "4006381000002", "name": "Pencil"}
        ]
    }))]);
    let sdk = common::sdk_for(&api);

    let products = sdk.search().by_prefix("4006381", None).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(
        api.requests()[0],
        "format=json&token=test-token&op=barcode-prefix-search&prefix=4006381&page=0"
    );
}

// ---------------------------------------------------------------------------
// by_category
// ---------------------------------------------------------------------------

#[test]
fn by_category_defaults_name_to_empty() {
    let api = MockApi::start(vec![Scripted::json(json!({"productlist": []}))]);
    let sdk = common::sdk_for(&api);

    sdk.search().by_category("45", None, None).unwrap();

    assert_eq!(
        api.requests()[0],
        "format=json&token=test-token&op=category-search&category=45&name=&page=0"
    );
}

#[test]
fn by_category_encodes_name_filter() {
    let api = MockApi::start(vec![Scripted::json(json!({
        "productlist": [{"ean": "5099750442227", "name": "Thriller"}]
    }))]);
    let sdk = common::sdk_for(&api);

    let products = sdk.search().by_category("45", Some("michael jackson"), Some(1)).unwrap();
    assert_eq!(products.len(), 1);
    assert!(api.requests()[0].contains("category=45&name=michael+jackson&page=1"));
}

// ---------------------------------------------------------------------------
// rejected requests
// ---------------------------------------------------------------------------

#[test]
fn bad_request_yields_empty_vec_without_decoding() {
    // The 400 body is deliberately not JSON; reaching the decoder would fail.
    let api = MockApi::start(vec![Scripted::error(400, "Bad Request: missing parameter")]);
    let sdk = common::sdk_for(&api);

    assert!(sdk.search().by_name("oops", None).unwrap().is_empty());
}

#[test]
fn bad_request_yields_none_for_lookups() {
    let api = MockApi::start(vec![Scripted::error(400, "Bad Request")]);
    let sdk = common::sdk_for(&api);

    assert!(sdk.lookup().gtin("not-a-barcode", None).unwrap().is_none());
}
