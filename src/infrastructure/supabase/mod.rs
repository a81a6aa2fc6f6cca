//! Supabase (PostgREST) remote report store
//!
//! Reads report rows from the `analysis_runs` table over the PostgREST
//! HTTP interface. Only reads are issued; rows are written by the report
//! generator, which lives outside this service.

pub mod client;
pub mod error;
pub mod types;

pub use client::{SupabaseConfig, SupabaseReportStore};
pub use error::SupabaseError;
