//! Paxfinder - passenger manifest parser and search
//!
//! Paxfinder takes loosely structured, hand-pasted flight manifests, turns
//! them into passenger records grouped by flight code, keeps them in a
//! local state database and finds passengers by flight, name, seat or
//! number.
//!
//! # Architecture
//!
//! - **manifest** (workspace crate): parser, merge and search over plain data
//! - **book**: application service combining the core with persisted state
//! - **storage**: key-value state store (SQLite, in-memory) and state repository
//! - **config**: YAML configuration and validation
//! - **display** / **style**: terminal rendering

pub mod book;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod storage;
pub mod style;

// Re-exports
pub use error::{PaxError, Result};
