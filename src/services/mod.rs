//! Service layer
//!
//! Business logic coordinating the storage ports.

pub mod report_resolver;

pub use report_resolver::ReportResolver;
