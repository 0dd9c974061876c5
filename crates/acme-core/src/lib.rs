//! # acme-core -- Domain Types for the Acme Load Broker
//!
//! Holds everything the broker knows about its own data, independent of
//! HTTP and of the FMCSA registry:
//!
//! - [`Load`] records and the [`LoadCatalog`] that searches them.
//! - [`CallLog`] records and the [`CallLogRecorder`] that appends them.
//! - [`McNumber`] and the [`Eligibility`] verdict for carrier checks.
//! - The [`Repository`] abstraction with [`JsonFileStore`] and
//!   [`MemoryStore`] implementations.
//!
//! ## Crate Policy
//!
//! - No async, no HTTP. Callers on an async runtime run catalog and
//!   recorder operations on a blocking thread.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod call_log;
pub mod carrier;
pub mod error;
pub mod identity;
pub mod load;
pub mod store;

pub use call_log::{CallLog, CallLogRecorder};
pub use carrier::Eligibility;
pub use error::{CatalogError, StorageError, ValidationError};
pub use identity::McNumber;
pub use load::{Load, LoadCatalog, LoadQuery};
pub use store::{JsonFileStore, MemoryStore, Repository};
