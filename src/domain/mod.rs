//! Domain layer for the CompeteIQ report server
//!
//! This module contains the report model, configuration types, error types,
//! and the storage ports the resolver is written against.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ReportError, StoreError, StoreResult};
