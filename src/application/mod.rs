//! Application layer services implementing the core operations.
//!
//! Services consume the domain traits and expose the two operations the
//! transport layers call:
//!
//! - [`services::link_service::LinkService::create_short_link`] - validate a URL and allocate a code
//! - [`services::link_service::LinkService::resolve`] - look a code up
//!
//! URL validation lives in [`services::url_validator::UrlValidator`].

pub mod services;
