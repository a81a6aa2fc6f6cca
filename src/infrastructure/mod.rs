//! Infrastructure layer
//!
//! Adapters for the storage ports plus configuration, logging, and startup
//! wiring.

pub mod config;
pub mod logging;
pub mod setup;
pub mod storage;
pub mod supabase;
