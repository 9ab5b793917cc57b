//! Invoice record extraction module.

mod placeholder;

pub use placeholder::PlaceholderExtractor;

use std::path::Path;

use crate::error::Result;
use crate::models::invoice::InvoiceRecord;

/// Trait for invoice record extractors.
pub trait InvoiceExtractor {
    /// Build an invoice record for the document at `path`.
    fn extract(&self, path: &Path) -> Result<InvoiceRecord>;
}

/// Build a record for `path` with the default placeholder values.
pub fn process_invoice(path: &Path) -> Result<InvoiceRecord> {
    PlaceholderExtractor::default().extract(path)
}
