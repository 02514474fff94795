//! Configuration types
//!
//! Start-up settings, encodable as postcard binary data.

pub mod types;

pub use types::*;
