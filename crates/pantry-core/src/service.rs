//! Capability contract implemented by every grocery chain adapter.

use crate::geo::GeoLocation;
use crate::item::Item;

/// A single grocery-chain integration.
///
/// One adapter instance binds to at most one physical store at a time:
/// [`initialize_location`](GroceryStoreService::initialize_location) resolves
/// the store nearest a query point, and subsequent
/// [`search_for_item`](GroceryStoreService::search_for_item) calls are scoped
/// to it. Implementations are not designed for concurrent mutation of a
/// single instance; the aggregator drives each adapter sequentially and runs
/// adapters for different chains in parallel.
#[allow(async_fn_in_trait)]
pub trait GroceryStoreService {
    /// Error type surfaced by the network-bound operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Display name of the resolved chain, or a generic chain label before a
    /// location has been resolved.
    fn name(&self) -> String;

    /// Formatted postal address of the resolved store, empty before
    /// resolution.
    fn address(&self) -> String;

    /// `true` iff a store has been resolved and it lies strictly closer than
    /// `radius_miles` to the query point. Never fails and performs no I/O.
    fn is_in_range(&self, radius_miles: f64) -> bool;

    /// Resolves and records the store nearest to `point` within
    /// `radius_miles`, returning the store's coordinates.
    ///
    /// # Errors
    ///
    /// Implementation-specific; a lookup that finds no candidate store is an
    /// error, not an empty default, and must leave any previously resolved
    /// store untouched.
    async fn initialize_location(
        &mut self,
        point: &GeoLocation,
        radius_miles: f64,
    ) -> Result<GeoLocation, Self::Error>;

    /// Searches the resolved store for items matching `term`, preserving the
    /// provider's result ordering. Returns an empty list (not an error) when
    /// no location has been resolved or nothing matches.
    ///
    /// # Errors
    ///
    /// Implementation-specific transport or parse failures only.
    async fn search_for_item(&mut self, term: &str) -> Result<Vec<Item>, Self::Error>;
}
