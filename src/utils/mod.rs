//! Helpers shared across layers.
//!
//! - [`short_code`] - parsing of short code tokens from requests
//! - [`db_error`] - classification of database errors

pub mod db_error;
pub mod short_code;
