//! Port trait definitions (Hexagonal Architecture)
//!
//! The resolver only sees these two traits:
//! - LocalReportStore: the on-disk report cache
//! - RemoteReportStore: the remote table of report rows
//!
//! Infrastructure adapters implement them; tests substitute in-memory fakes.

pub mod local_store;
pub mod remote_store;

pub use local_store::LocalReportStore;
pub use remote_store::RemoteReportStore;
