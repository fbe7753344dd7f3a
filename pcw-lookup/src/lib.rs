//! # PCW Lookup
//!
//! The cache-aside orchestrator: check the cache, fetch from upstream on a
//! miss, write the result back in the background, and map every failure mode
//! to exactly one terminal [`pcw_core::LookupOutcome`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pcw_lookup::LookupService;
//!
//! let service = LookupService::new(cache, provider);
//! let outcome = service.lookup(&request).await;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod orchestrator;

pub use orchestrator::LookupService;
