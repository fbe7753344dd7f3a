//! # PCW Core
//!
//! Core types, errors, and adapter traits for the PCW address-lookup proxy.
//!
//! This crate provides the foundational building blocks used by all other
//! proxy crates:
//!
//! - **Types**: [`Catalog`], [`LookupRequest`], [`CacheKey`], [`LookupOutcome`]
//! - **Errors**: [`ProxyError`] with classification helpers
//! - **Traits**: The [`AddressCache`] and [`AddressProvider`] seams the
//!   orchestrator depends on
//!
//! No I/O happens here; the adapter crates implement the traits.
//!
//! ## Example
//!
//! ```rust
//! use pcw_core::{Catalog, CacheKey};
//!
//! let key = CacheKey::new(Catalog::Eircode, "D02X285");
//! assert_eq!(key.as_str(), "ie:D02X285");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ProxyError, Result};
pub use traits::*;
pub use types::*;
