//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain contracts.
//!
//! # Modules
//!
//! - [`dns`] - host name resolution
//! - [`persistence`] - link storage (PostgreSQL and in-memory)

pub mod dns;
pub mod persistence;
