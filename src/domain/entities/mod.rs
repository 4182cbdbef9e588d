//! Core domain entities.
//!
//! - [`Link`] - a short code mapped to the URL it redirects to

pub mod link;

pub use link::Link;
