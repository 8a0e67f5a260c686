//! Shared value objects and the capability contract for grocery chain adapters.
//!
//! Each supported chain implements [`GroceryStoreService`] in its own crate;
//! the multi-chain aggregator consumes adapters solely through that contract
//! and the [`GeoLocation`]/[`Item`] value types defined here.

pub mod geo;
pub mod item;
pub mod service;

pub use geo::GeoLocation;
pub use item::{Item, UNKNOWN_DISTANCE};
pub use service::GroceryStoreService;
