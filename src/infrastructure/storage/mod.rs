//! Local report storage

pub mod file_store;

pub use file_store::FileReportStore;
