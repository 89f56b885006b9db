//! CRM domain types shared across the relate suite
//!
//! This crate provides the canonical domain models for contact
//! management:
//! - Contact: A person record with identifiers, organization info,
//!   tags, and custom fields
//! - ContactStore: The storage trait all backends implement
//! - InMemoryContactStore: A simple in-memory backend for tests and
//!   embedded use

pub mod contact;
pub mod store;

pub use contact::*;
pub use store::*;
