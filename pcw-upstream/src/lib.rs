//! # PCW Upstream
//!
//! reqwest-backed implementation of the [`pcw_core::AddressProvider`]
//! contract: one GET per call against the external address-lookup provider,
//! status and body handed back verbatim.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod provider;

pub use provider::{HttpAddressProvider, ProviderConfig};
