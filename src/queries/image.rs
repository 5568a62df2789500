//! Barcode image retrieval.
//!
//! The image operation is the one place the service answers in XML: the
//! rendered barcode is a base64-encoded payload inside an `image` element.

use base64::Engine as _;

use crate::config;
use crate::error::{BarcodeLookupError, Result};
use crate::transport::{Format, Transport};

// ---------------------------------------------------------------------------
// ImageQuery
// ---------------------------------------------------------------------------

/// Query interface for rendered barcode images.
pub struct ImageQuery<'a> {
    transport: &'a Transport,
}

impl<'a> ImageQuery<'a> {
    /// Create a new `ImageQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch a rendered barcode image and return its base64 payload.
    ///
    /// Width and height are in pixels and default to 102x50. Fails with
    /// [`BarcodeLookupError::MissingImage`] when the response carries no
    /// image element.
    pub fn barcode(&self, ean: &str, width: Option<u32>, height: Option<u32>) -> Result<String> {
        let width = width.unwrap_or(config::DEFAULT_IMAGE_WIDTH);
        let height = height.unwrap_or(config::DEFAULT_IMAGE_HEIGHT);

        let body = self
            .transport
            .get_raw(
                Format::Xml,
                &format!(
                    "op={}&ean={}&width={}&height={}",
                    config::OP_BARCODE_IMAGE,
                    ean,
                    width,
                    height
                ),
            )?
            .ok_or_else(|| BarcodeLookupError::MissingImage(ean.to_string()))?;

        let doc = roxmltree::Document::parse(&body)?;
        let image = doc
            .descendants()
            .find(|node| node.has_tag_name("image"))
            .and_then(|node| node.text())
            .ok_or_else(|| BarcodeLookupError::MissingImage(ean.to_string()))?;

        Ok(image.trim().to_string())
    }

    /// Fetch a rendered barcode image decoded to raw bytes.
    pub fn barcode_bytes(
        &self,
        ean: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<Vec<u8>> {
        let payload = self.barcode(ean, width, height)?;
        Ok(base64::engine::general_purpose::STANDARD.decode(payload.as_bytes())?)
    }
}
