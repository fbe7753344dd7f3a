//! # PCW Mock
//!
//! A stand-in for the external address-lookup provider: serves the same
//! route shape as the real thing and answers every query with a JSON array
//! of randomly generated address records. Fixture behavior for development
//! and end-to-end tests, not core logic.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod address;
mod service;

pub use address::{random_addresses, MockAddress};
pub use service::{mock_router, MockProvider};
