//! Invoice record model and its wire format.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Date format used on the wire (`DD.MM.YYYY`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The structured result describing an extracted invoice.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvoiceRecord {
    /// Invoice number/identifier.
    pub invoice_number: String,

    /// Date the invoice was issued.
    #[serde(with = "dmy_date")]
    pub invoice_date: NaiveDate,

    /// Type of invoice.
    pub invoice_type: InvoiceType,

    /// Invoice total, always written with two decimal places.
    #[serde(with = "amount_str")]
    pub amount: Decimal,

    /// Expense/revenue category.
    pub category: String,
}

impl InvoiceRecord {
    /// Check the record invariants and return every violation found.
    pub fn validate(&self) -> Vec<ExtractionError> {
        let mut issues = Vec::new();

        if self.invoice_number.trim().is_empty() {
            issues.push(ExtractionError::MissingField("invoiceNumber".to_string()));
        }

        if self.category.trim().is_empty() {
            issues.push(ExtractionError::MissingField("category".to_string()));
        }

        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            issues.push(ExtractionError::Validation {
                field: "amount".to_string(),
                reason: format!("negative amount {}", self.amount),
            });
        }

        issues
    }
}

/// Type of invoice document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceType {
    /// Sales invoice (satış faturası).
    #[default]
    #[serde(rename = "SATIS")]
    Sale,
    /// Purchase invoice (alış faturası).
    #[serde(rename = "ALIS")]
    Purchase,
}

impl InvoiceType {
    /// Wire code of the invoice type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "SATIS",
            Self::Purchase => "ALIS",
        }
    }
}

impl fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of document a file path points at, judged by extension only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// PDF document.
    Pdf,
    /// Raster image (PNG/JPEG).
    Image,
    /// Anything else, including paths without an extension.
    #[default]
    Unknown,
}

impl SourceType {
    /// Classify a path by its extension. The file is never opened.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Self::Pdf,
            "png" | "jpg" | "jpeg" => Self::Image,
            _ => Self::Unknown,
        }
    }
}

/// Serde adapter for `DD.MM.YYYY` dates.
mod dmy_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter writing amounts as two-decimal strings, rounding half away
/// from zero.
mod amount_str {
    use std::str::FromStr;

    use rust_decimal::{Decimal, RoundingStrategy};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        serializer.serialize_str(&format!("{:.2}", rounded))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let s = String::deserialize(deserializer)?;
        Decimal::from_str(s.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> InvoiceRecord {
        InvoiceRecord {
            invoice_number: "TEST-2024-001".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            invoice_type: InvoiceType::Sale,
            amount: Decimal::new(125000, 2),
            category: "TEST".to_string(),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["invoiceNumber"], "TEST-2024-001");
        assert_eq!(obj["invoiceDate"], "01.05.2024");
        assert_eq!(obj["invoiceType"], "SATIS");
        assert_eq!(obj["amount"], "1250.00");
        assert_eq!(obj["category"], "TEST");
    }

    #[test]
    fn test_amount_padding_and_rounding() {
        let mut record = sample();

        record.amount = Decimal::new(1250, 0);
        assert_eq!(serde_json::to_value(&record).unwrap()["amount"], "1250.00");

        record.amount = Decimal::new(99999, 3);
        assert_eq!(serde_json::to_value(&record).unwrap()["amount"], "100.00");

        record.amount = Decimal::new(125, 3);
        assert_eq!(serde_json::to_value(&record).unwrap()["amount"], "0.13");

        record.amount = Decimal::new(135, 3);
        assert_eq!(serde_json::to_value(&record).unwrap()["amount"], "0.14");
    }

    #[test]
    fn test_deserialize_from_wire() {
        let json = r#"{"invoiceNumber": "TEST-2024-001", "invoiceDate": "01.05.2024", "invoiceType": "SATIS", "amount": "1250.00", "category": "TEST"}"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_rejects_bad_date() {
        let json = r#"{"invoiceNumber": "X", "invoiceDate": "2024-05-01", "invoiceType": "SATIS", "amount": "1.00", "category": "T"}"#;
        assert!(serde_json::from_str::<InvoiceRecord>(json).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_empty());

        let mut record = sample();
        record.invoice_number = "  ".to_string();
        record.category = String::new();
        record.amount = Decimal::new(-5, 0);

        let issues = record.validate();
        assert_eq!(issues.len(), 3);
        assert!(matches!(&issues[0], ExtractionError::MissingField(f) if f == "invoiceNumber"));
        assert!(matches!(&issues[1], ExtractionError::MissingField(f) if f == "category"));
        assert!(matches!(&issues[2], ExtractionError::Validation { field, .. } if field == "amount"));
    }

    #[test]
    fn test_source_type_from_path() {
        assert_eq!(SourceType::from_path(Path::new("/tmp/a.PDF")), SourceType::Pdf);
        assert_eq!(SourceType::from_path(Path::new("scan.jpeg")), SourceType::Image);
        assert_eq!(SourceType::from_path(Path::new("scan.png")), SourceType::Image);
        assert_eq!(SourceType::from_path(Path::new("notes.txt")), SourceType::Unknown);
        assert_eq!(SourceType::from_path(Path::new("")), SourceType::Unknown);
    }

    #[test]
    fn test_invoice_type_display() {
        assert_eq!(InvoiceType::Sale.to_string(), "SATIS");
        assert_eq!(InvoiceType::Purchase.to_string(), "ALIS");
    }
}
