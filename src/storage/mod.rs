//! Document Storage Module
//!
//! Owns the mapping from document id to document record.
//!
//! ## Core Concepts
//! - **Snapshots**: Reads and writes return owned copies of a record, never live references.
//! - **Atomic Updates**: A `DocumentPatch` is applied under the entry lock, so readers never
//!   observe a record that mixes fields from two updates.
//! - **Guarded Transitions**: `try_transition` checks the lifecycle table and applies the patch
//!   in the same critical section.

pub mod error;
pub mod memory;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use memory::DocumentStore;
