//! # itemhub-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole item collection lives in one
//! pretty-printed JSON array.
//!
//! ## Responsibilities
//! - Implement the `ItemRepository` port defined in `itemhub-app::ports::storage`
//! - Create the backing file (and its parent directories) when absent
//! - Replace the backing file atomically on every save
//!
//! ## Dependency rule
//! Depends on `itemhub-app` (for port traits) and `itemhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod file;

pub use file::{Config, JsonFileItemRepository};
