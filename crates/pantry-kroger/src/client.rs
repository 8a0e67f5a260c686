//! The Kroger chain adapter.
//!
//! Wraps the Kroger v1 REST API (`connect/oauth2/token`, `locations`,
//! `products`) behind the [`GroceryStoreService`] contract: resolve the
//! nearest store to a point once, then run any number of product searches
//! scoped to it.

use std::time::Duration;

use pantry_core::{GeoLocation, GroceryStoreService, Item};
use reqwest::{Client, Url};

use crate::config::KrogerConfig;
use crate::error::KrogerError;
use crate::normalize::normalize_product;
use crate::token::{Credentials, TokenCache};
use crate::types::{LocationsResponse, ProductsResponse};

/// Chain label reported before a location has been resolved.
const DEFAULT_CHAIN_NAME: &str = "Kroger";

/// The store a [`KrogerStore`] has bound to after location initialization.
#[derive(Debug, Clone)]
struct ResolvedStore {
    location_id: String,
    coordinates: GeoLocation,
    address: String,
    chain_name: String,
    distance_miles: f64,
}

/// Kroger implementation of [`GroceryStoreService`].
///
/// One instance tracks exactly one resolved store at a time; calling
/// [`KrogerStore::initialize_location`] again rebinds the instance to the new
/// nearest store. The cached bearer token and the resolved store live for the
/// life of the instance only — nothing is persisted.
pub struct KrogerStore {
    http: Client,
    token_url: Url,
    locations_url: Url,
    products_url: Url,
    credentials: Credentials,
    token: TokenCache,
    store: Option<ResolvedStore>,
}

/// Clones `url` and appends `params` as percent-encoded query pairs.
fn with_params(url: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = url.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    url
}

impl KrogerStore {
    /// Creates an adapter from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`KrogerError::Config`] if the base URL does not parse or the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(config: &KrogerConfig) -> Result<Self, KrogerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pantry/0.1 (grocery-price-comparison)")
            .build()
            .map_err(|e| KrogerError::Config(format!("failed to build HTTP client: {e}")))?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join treats the final path segment as a directory.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            KrogerError::Config(format!("invalid base URL \"{}\": {e}", config.base_url))
        })?;

        let join = |path: &str| {
            base_url
                .join(path)
                .map_err(|e| KrogerError::Config(format!("invalid endpoint \"{path}\": {e}")))
        };

        Ok(Self {
            http,
            token_url: join("connect/oauth2/token")?,
            locations_url: join("locations")?,
            products_url: join("products")?,
            credentials: Credentials {
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
            },
            token: TokenCache::default(),
            store: None,
        })
    }

    /// Display name of the resolved chain, or `"Kroger"` before a location
    /// has been resolved.
    #[must_use]
    pub fn name(&self) -> String {
        self.store
            .as_ref()
            .map_or_else(|| DEFAULT_CHAIN_NAME.to_string(), |s| s.chain_name.clone())
    }

    /// Formatted postal address (`"line1, city, state zip"`) of the resolved
    /// store, empty before resolution.
    #[must_use]
    pub fn address(&self) -> String {
        self.store.as_ref().map_or_else(String::new, |s| s.address.clone())
    }

    /// `true` iff a store has been resolved and it lies strictly closer than
    /// `radius_miles` to the query point used to resolve it.
    #[must_use]
    pub fn is_in_range(&self, radius_miles: f64) -> bool {
        self.store
            .as_ref()
            .is_some_and(|s| s.distance_miles < radius_miles)
    }

    /// Resolves the store nearest to `point` within `radius_miles`, records
    /// it as this adapter's store, and returns its coordinates.
    ///
    /// # Errors
    ///
    /// - [`KrogerError::Auth`] if the credential exchange fails.
    /// - [`KrogerError::Lookup`] on transport/parse failure or when the
    ///   provider returns zero candidates. A previously resolved store is
    ///   left untouched on failure.
    pub async fn initialize_location(
        &mut self,
        point: &GeoLocation,
        radius_miles: f64,
    ) -> Result<GeoLocation, KrogerError> {
        let bearer = self
            .token
            .bearer(&self.http, &self.token_url, &self.credentials)
            .await?;

        let url = with_params(
            &self.locations_url,
            &[
                ("filter.lat.near", &point.latitude().to_string()),
                ("filter.lon.near", &point.longitude().to_string()),
                ("filter.radiusInMiles", &radius_miles.to_string()),
            ],
        );

        let response = self
            .http
            .get(url)
            .bearer_auth(&bearer)
            .send()
            .await
            .map_err(|e| KrogerError::Lookup(format!("location request failed: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "location search rejected");
            return Err(KrogerError::Lookup(format!(
                "location search returned status {}",
                response.status()
            )));
        }

        let payload: LocationsResponse = response
            .json()
            .await
            .map_err(|e| KrogerError::Lookup(format!("malformed location payload: {e}")))?;

        // Candidates arrive pre-sorted by proximity; the first one is the
        // closest store. No independent re-ranking across candidates.
        let Some(candidate) = payload.data.into_iter().next() else {
            tracing::warn!(radius_miles, "no locations within radius");
            return Err(KrogerError::Lookup(format!(
                "no locations within {radius_miles} miles"
            )));
        };

        let coordinates = GeoLocation::new(
            candidate.geolocation.latitude,
            candidate.geolocation.longitude,
        );
        let distance_miles = point.distance_miles(&coordinates);
        let chain_name = candidate
            .chain
            .unwrap_or_else(|| DEFAULT_CHAIN_NAME.to_string());

        tracing::debug!(
            location_id = %candidate.location_id,
            chain = %chain_name,
            distance_miles,
            "resolved nearest store"
        );

        let store = self.store.insert(ResolvedStore {
            location_id: candidate.location_id,
            coordinates,
            address: candidate.address.formatted(),
            chain_name,
            distance_miles,
        });

        Ok(store.coordinates)
    }

    /// Searches the resolved store for products matching `term` and returns
    /// them normalized, preserving the provider's ordering. Records without a
    /// usable positive price are dropped silently.
    ///
    /// Returns an empty list without any network call when no location has
    /// been resolved.
    ///
    /// # Errors
    ///
    /// - [`KrogerError::Auth`] if the credential exchange fails.
    /// - [`KrogerError::Search`] on transport or parse failure.
    pub async fn search_for_item(&mut self, term: &str) -> Result<Vec<Item>, KrogerError> {
        let Some(store) = self.store.clone() else {
            tracing::debug!(term, "search before location resolution, returning no items");
            return Ok(Vec::new());
        };

        let bearer = self
            .token
            .bearer(&self.http, &self.token_url, &self.credentials)
            .await?;

        let url = with_params(
            &self.products_url,
            &[
                ("filter.term", term),
                ("filter.locationId", &store.location_id),
            ],
        );

        let response = self
            .http
            .get(url)
            .bearer_auth(&bearer)
            .send()
            .await
            .map_err(|e| KrogerError::Search(format!("product request failed: {e}")))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), term, "product search rejected");
            return Err(KrogerError::Search(format!(
                "product search returned status {}",
                response.status()
            )));
        }

        let payload: ProductsResponse = response
            .json()
            .await
            .map_err(|e| KrogerError::Search(format!("malformed product payload: {e}")))?;

        let matched = payload.data.len();
        let items: Vec<Item> = payload
            .data
            .iter()
            .filter_map(|product| {
                normalize_product(product, &store.chain_name, store.distance_miles)
            })
            .collect();

        tracing::debug!(term, matched, priced = items.len(), "product search complete");
        Ok(items)
    }
}

impl GroceryStoreService for KrogerStore {
    type Error = KrogerError;

    fn name(&self) -> String {
        KrogerStore::name(self)
    }

    fn address(&self) -> String {
        KrogerStore::address(self)
    }

    fn is_in_range(&self, radius_miles: f64) -> bool {
        KrogerStore::is_in_range(self, radius_miles)
    }

    async fn initialize_location(
        &mut self,
        point: &GeoLocation,
        radius_miles: f64,
    ) -> Result<GeoLocation, KrogerError> {
        KrogerStore::initialize_location(self, point, radius_miles).await
    }

    async fn search_for_item(&mut self, term: &str) -> Result<Vec<Item>, KrogerError> {
        KrogerStore::search_for_item(self, term).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
