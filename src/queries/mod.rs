//! Query interfaces for the barcode lookup SDK.
//!
//! Each module provides a query struct that borrows the [`Transport`](crate::transport::Transport)
//! and exposes the operations for one slice of the service's surface, returning
//! `Result<T>` with domain-shaped payloads.

pub mod image;
pub mod lookup;
pub mod search;
pub mod verify;

pub use image::ImageQuery;
pub use lookup::LookupQuery;
pub use search::SearchQuery;
pub use verify::VerifyQuery;
