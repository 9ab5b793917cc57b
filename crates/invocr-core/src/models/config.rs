//! Configuration structures for record extraction.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{InvocrError, Result};
use crate::models::invoice::InvoiceType;

/// Main configuration for invocr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvocrConfig {
    /// Values returned by the placeholder extractor.
    pub placeholder: PlaceholderConfig,
}

/// Fixed field values used in place of real extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Invoice number.
    pub invoice_number: String,

    /// Invoice type.
    pub invoice_type: InvoiceType,

    /// Invoice amount.
    pub amount: Decimal,

    /// Category.
    pub category: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            invoice_number: "TEST-2024-001".to_string(),
            invoice_type: InvoiceType::Sale,
            amount: Decimal::new(125000, 2),
            category: "TEST".to_string(),
        }
    }
}

impl InvocrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| InvocrError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
