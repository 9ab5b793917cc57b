//! Core library for invoice extraction records.
//!
//! This crate provides:
//! - The invoice record model and its wire format
//! - A placeholder extractor standing in for a real OCR pipeline
//! - ASCII-safe single-line JSON output
//! - Configuration of the placeholder values

pub mod error;
pub mod invoice;
pub mod models;
pub mod output;

pub use error::{ExtractionError, InvocrError, Result};
pub use invoice::{InvoiceExtractor, PlaceholderExtractor, process_invoice};
pub use models::config::{InvocrConfig, PlaceholderConfig};
pub use models::invoice::{InvoiceRecord, InvoiceType, SourceType};
pub use output::to_ascii_json;
