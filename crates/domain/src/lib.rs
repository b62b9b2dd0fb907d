//! # itemhub-domain
//!
//! Pure domain model for the itemhub scheduling service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Items** (scheduling records: name, date, address)
//! - Define **Drafts** (the client-supplied fields of an item, validated before storage)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod item;
