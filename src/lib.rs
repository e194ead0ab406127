//! Document Ingestion Service Library
//!
//! This library crate defines the modules behind the service binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`storage`**: The in-memory record store. Owns every document record and is the only
//!   place records are mutated; all operations are atomic per record.
//! - **`ingestion`**: The document lifecycle. Stores new submissions as `pending` and runs a
//!   detached task per document that moves it through `processing` to `completed` or `failed`.
//! - **`server`**: The axum router exposing create, get and status lookups.
//! - **`config`** / **`error`**: Runtime configuration and HTTP error mapping.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod server;
pub mod storage;
