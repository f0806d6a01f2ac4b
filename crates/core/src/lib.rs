//! Core business logic for Lekha.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, aggregation rules, and report calculations live here.
//!
//! # Modules
//!
//! - `documents` - Billing document records (invoices, returns, products)
//! - `fiscal` - Reporting period handling
//! - `reports` - Tax and profitability aggregation

pub mod documents;
pub mod fiscal;
pub mod reports;
