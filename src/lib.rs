//! edinet-manifest - EDINET disclosure filing manifest parser
//!
//! Parses the fixed-schema manifest XML that accompanies an EDINET filing
//! into an immutable object graph. The XML tree itself comes from
//! `roxmltree`; this crate only walks it and validates the manifest schema.
//!
//! Licensed under AGPL-3.0

pub mod model;
pub mod names;
pub mod parser;
pub mod qname;

// Re-export main types
pub use model::{Insert, Instance, Item, Manifest, Title, TocComposition};
pub use qname::QName;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Manifest parse error: {0}")]
    Parse(String),
}
