//! Core library for bank payment-slip processing.
//!
//! This crate provides:
//! - Parsing of raw extraction service responses
//! - Account identifier cleanup and bank sort code resolution
//! - Debit/credit reconciliation and same-bank checks
//! - Flattening of document-specific fields
//! - Report building with deterministic column ordering

pub mod error;
pub mod models;
pub mod payment;
pub mod report;

pub use error::{ResponseError, Result, SlipError};
pub use models::canonical::CanonicalPaymentRecord;
pub use models::config::SlipConfig;
pub use models::fields::FieldMap;
pub use models::record::{RawExtractedRecord, SourceRecord};
pub use payment::rules::{format_amount, normalize_account_id, BankRegistry};
pub use payment::{MergePolicy, RecordProcessor, SameBankCheck, SlipPipeline};
pub use report::{Report, ReportBuilder};
