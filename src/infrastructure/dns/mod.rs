//! Host name resolution backends.

pub mod system_resolver;

pub use system_resolver::SystemResolver;
