//! Kroger API response types.
//!
//! All types model the JSON structures returned by the Kroger v1 REST API.
//! Fields the provider may omit are `#[serde(default)]`/`Option` so that odd
//! payloads degrade to missing fields instead of deserialization failures —
//! the normalization layer turns missing fields into soft absences.

use serde::Deserialize;

/// OAuth2 token payload from `POST connect/oauth2/token`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Token lifetime in seconds from issue time.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// locations
// ---------------------------------------------------------------------------

/// Top-level envelope for `GET locations`.
#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    #[serde(default)]
    pub data: Vec<Location>,
}

/// A single store candidate.
///
/// The API returns candidates pre-sorted by proximity to the query point, so
/// the first entry is the closest store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: String,
    /// Chain display name, e.g. `"Kroger"` or `"Fred Meyer"`.
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub address: LocationAddress,
    pub geolocation: Coordinates,
}

/// Postal address of a store. Individual fields may be absent on some
/// locations and default to empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAddress {
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

impl LocationAddress {
    /// Formats the address as `"line1, city, state zip"`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address_line1, self.city, self.state, self.zip_code
        )
    }
}

/// Coordinates as returned inside a [`Location`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// products
// ---------------------------------------------------------------------------

/// Top-level envelope for `GET products`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub data: Vec<Product>,
}

/// A single raw product record from a product search.
#[derive(Debug, Deserialize)]
pub struct Product {
    /// Display name of the product; the API has no separate name field.
    #[serde(default)]
    pub description: Option<String>,
    /// Sellable entries; the first one carries the shelf price and size.
    #[serde(default)]
    pub items: Vec<ProductItem>,
    /// Image gallery grouped by perspective (`"front"`, `"back"`, ...).
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

/// One sellable entry of a [`Product`].
#[derive(Debug, Deserialize)]
pub struct ProductItem {
    #[serde(default)]
    pub price: Option<ProductPrice>,
    /// Combined quantity + unit string, e.g. `"2 LB"` or `"1/2 GAL"`.
    #[serde(default)]
    pub size: Option<String>,
}

/// Shelf price for a [`ProductItem`].
#[derive(Debug, Deserialize)]
pub struct ProductPrice {
    /// Regular (non-promotional) price in dollars.
    #[serde(default)]
    pub regular: Option<f64>,
    /// Promotional price when the item is on sale. Not used for filtering.
    #[serde(default)]
    pub promo: Option<f64>,
}

/// One perspective entry of a product's image gallery.
#[derive(Debug, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub perspective: Option<String>,
    #[serde(default)]
    pub sizes: Vec<ImageSize>,
}

/// A single rendered size of a [`ProductImage`].
#[derive(Debug, Deserialize)]
pub struct ImageSize {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_address_joins_fields() {
        let address = LocationAddress {
            address_line1: "100 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        };
        assert_eq!(address.formatted(), "100 Main St, Springfield, IL 62701");
    }

    #[test]
    fn location_deserializes_camel_case_fields() {
        let json = serde_json::json!({
            "locationId": "01400943",
            "chain": "Kroger",
            "address": {
                "addressLine1": "100 Main St",
                "city": "Springfield",
                "state": "IL",
                "zipCode": "62701"
            },
            "geolocation": { "latitude": 39.7817, "longitude": -89.6501 }
        });
        let location: Location = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(location.location_id, "01400943");
        assert_eq!(location.chain.as_deref(), Some("Kroger"));
        assert_eq!(location.address.zip_code, "62701");
    }

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let json = serde_json::json!({ "description": "Bananas" });
        let product: Product = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(product.description.as_deref(), Some("Bananas"));
        assert!(product.items.is_empty());
        assert!(product.images.is_empty());
    }

    #[test]
    fn product_price_tolerates_missing_regular() {
        let json = serde_json::json!({ "promo": 1.99 });
        let price: ProductPrice = serde_json::from_value(json).expect("should deserialize");
        assert!(price.regular.is_none());
        assert_eq!(price.promo, Some(1.99));
    }
}
