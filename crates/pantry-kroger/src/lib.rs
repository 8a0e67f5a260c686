//! Kroger chain adapter for the pantry grocery-comparison service.
//!
//! Authenticates against the Kroger v1 REST API with client credentials,
//! binds to the store nearest a query point, and normalizes product-search
//! results into the shared [`pantry_core::Item`] shape. Implements
//! [`pantry_core::GroceryStoreService`]; the multi-chain aggregator consumes
//! adapters solely through that contract.

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod types;

mod token;

pub use client::KrogerStore;
pub use config::KrogerConfig;
pub use error::KrogerError;
