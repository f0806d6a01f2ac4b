//! Billing document records.
//!
//! These are plain records already materialized from storage. This crate
//! owns no schema and performs no I/O; documents arrive pre-filtered by
//! business through the `reports::DocumentSource` seam.

pub mod types;

pub use types::*;
