//! Placeholder extractor returning configured values.

use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::InvoiceExtractor;
use crate::error::Result;
use crate::models::config::PlaceholderConfig;
use crate::models::invoice::{InvoiceRecord, SourceType};

/// Extractor that fills every field from [`PlaceholderConfig`] and dates the
/// record with today's local date.
///
/// The input path is classified for diagnostics but never opened, so
/// nonexistent paths produce a record like any other.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderExtractor {
    config: PlaceholderConfig,
    fixed_date: Option<NaiveDate>,
}

impl PlaceholderExtractor {
    pub fn new(config: PlaceholderConfig) -> Self {
        Self {
            config,
            fixed_date: None,
        }
    }

    /// Use `date` instead of the local clock.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl InvoiceExtractor for PlaceholderExtractor {
    fn extract(&self, path: &Path) -> Result<InvoiceRecord> {
        let source_type = SourceType::from_path(path);
        debug!("Building record for {} ({:?})", path.display(), source_type);

        let record = InvoiceRecord {
            invoice_number: self.config.invoice_number.clone(),
            invoice_date: self.today(),
            invoice_type: self.config.invoice_type,
            amount: self.config.amount,
            category: self.config.category.clone(),
        };

        if let Some(issue) = record.validate().into_iter().next() {
            return Err(issue.into());
        }

        Ok(record)
    }
}
