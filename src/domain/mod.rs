//! Domain layer: entities and the contracts the core depends on.
//!
//! - [`entities`] - core data structures
//! - [`repositories`] - storage contracts, implemented in `crate::infrastructure`
//! - [`resolver`] - host name resolution contract used by URL validation
//!
//! The domain layer has no dependency on the HTTP layer or on a concrete
//! storage technology.

pub mod entities;
pub mod repositories;
pub mod resolver;
