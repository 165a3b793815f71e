//! Data models: raw extraction records, canonical records, configuration.

pub mod canonical;
pub mod config;
pub mod fields;
pub mod record;
