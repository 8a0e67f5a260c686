//! Normalization of raw Kroger product records into the chain-agnostic
//! [`Item`] shape.
//!
//! Field mapping is tolerant: a record missing its image gallery, price, or
//! size string loses that field rather than failing the whole search. Records
//! without a usable positive price are dropped entirely.

use pantry_core::Item;

use crate::types::Product;

/// Converts one raw product record into an [`Item`], or `None` when the
/// record has no finite price greater than zero.
///
/// The caller preserves provider ordering; this function never re-ranks and
/// rejects on no grounds other than price.
#[must_use]
pub fn normalize_product(product: &Product, chain_name: &str, distance_miles: f64) -> Option<Item> {
    let price = regular_price(product).filter(|p| p.is_finite() && *p > 0.0)?;

    let size = product.items.first().and_then(|i| i.size.as_deref());
    let (quantity, unit_of_measure) = size.map_or_else(|| (1.0, String::new()), parse_size);

    Some(Item {
        name: product.description.clone().unwrap_or_default(),
        description: None,
        image_url: image_url(product),
        chain_name: chain_name.to_string(),
        distance: distance_miles,
        price: Some(price),
        quantity,
        unit_of_measure,
    })
}

/// Splits a provider size string into `(quantity, unit label)`.
///
/// The leading whitespace-delimited token is the quantity and the remainder
/// is the unit label: `"2 LB"` → `(2.0, "LB")`, `"12 FL OZ"` → `(12.0, "FL OZ")`.
/// A leading token containing `/` is read as a fraction: `"1/2 LB"` →
/// `(0.5, "LB")`. A size with no unit token yields an empty label. A size
/// whose leading token is not numeric falls back to quantity `1.0` with the
/// whole string as the label.
#[must_use]
pub fn parse_size(size: &str) -> (f64, String) {
    let trimmed = size.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let Some(first) = parts.next().filter(|token| !token.is_empty()) else {
        return (1.0, String::new());
    };
    let unit = parts.next().map(str::trim).unwrap_or_default();

    match parse_quantity(first) {
        Some(quantity) => (quantity, unit.to_string()),
        None => (1.0, trimmed.to_string()),
    }
}

/// Parses a quantity token, reading `a/b` as a fraction.
fn parse_quantity(token: &str) -> Option<f64> {
    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }
    token.parse().ok()
}

/// First sellable entry's regular shelf price, when present.
fn regular_price(product: &Product) -> Option<f64> {
    product
        .items
        .first()
        .and_then(|item| item.price.as_ref())
        .and_then(|price| price.regular)
}

/// URL of the second gallery entry's first rendered size.
///
/// The gallery is perspective-grouped and the second entry is the usable
/// product shot; a missing gallery, entry, or size list yields no image.
fn image_url(product: &Product) -> Option<String> {
    product
        .images
        .get(1)
        .and_then(|image| image.sizes.first())
        .and_then(|size| size.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageSize, ProductImage, ProductItem, ProductPrice};

    fn priced_product(regular: Option<f64>, size: Option<&str>) -> Product {
        Product {
            description: Some("Whole Milk".to_string()),
            items: vec![ProductItem {
                price: regular.map(|r| ProductPrice {
                    regular: Some(r),
                    promo: None,
                }),
                size: size.map(str::to_string),
            }],
            images: vec![],
        }
    }

    // -----------------------------------------------------------------------
    // parse_size
    // -----------------------------------------------------------------------

    #[test]
    fn parse_size_whole_number() {
        let (quantity, unit) = parse_size("2 LB");
        assert!((quantity - 2.0).abs() < 1e-9);
        assert_eq!(unit, "LB");
    }

    #[test]
    fn parse_size_fraction() {
        let (quantity, unit) = parse_size("1/2 LB");
        assert!((quantity - 0.5).abs() < 1e-9);
        assert_eq!(unit, "LB");
    }

    #[test]
    fn parse_size_decimal() {
        let (quantity, unit) = parse_size("8.5 OZ");
        assert!((quantity - 8.5).abs() < 1e-9);
        assert_eq!(unit, "OZ");
    }

    #[test]
    fn parse_size_multi_word_unit() {
        let (quantity, unit) = parse_size("12 FL OZ");
        assert!((quantity - 12.0).abs() < 1e-9);
        assert_eq!(unit, "FL OZ");
    }

    #[test]
    fn parse_size_no_unit_token() {
        let (quantity, unit) = parse_size("2");
        assert!((quantity - 2.0).abs() < 1e-9);
        assert_eq!(unit, "");
    }

    #[test]
    fn parse_size_empty_string() {
        let (quantity, unit) = parse_size("");
        assert!((quantity - 1.0).abs() < 1e-9);
        assert_eq!(unit, "");
    }

    #[test]
    fn parse_size_non_numeric_token_falls_back() {
        let (quantity, unit) = parse_size("EACH");
        assert!((quantity - 1.0).abs() < 1e-9);
        assert_eq!(unit, "EACH");
    }

    #[test]
    fn parse_size_zero_denominator_falls_back() {
        let (quantity, unit) = parse_size("1/0 LB");
        assert!((quantity - 1.0).abs() < 1e-9);
        assert_eq!(unit, "1/0 LB");
    }

    // -----------------------------------------------------------------------
    // normalize_product
    // -----------------------------------------------------------------------

    #[test]
    fn keeps_record_with_positive_price() {
        let item = normalize_product(&priced_product(Some(3.49), Some("1 GAL")), "Kroger", 2.4)
            .expect("expected an item");
        assert_eq!(item.name, "Whole Milk");
        assert_eq!(item.price, Some(3.49));
        assert!((item.quantity - 1.0).abs() < 1e-9);
        assert_eq!(item.unit_of_measure, "GAL");
        assert_eq!(item.chain_name, "Kroger");
        assert!((item.distance - 2.4).abs() < 1e-9);
        assert!(item.description.is_none());
        assert!(item.image_url.is_none());
    }

    #[test]
    fn drops_record_with_missing_price() {
        assert!(normalize_product(&priced_product(None, Some("1 GAL")), "Kroger", 0.0).is_none());
    }

    #[test]
    fn drops_record_with_zero_price() {
        assert!(normalize_product(&priced_product(Some(0.0), None), "Kroger", 0.0).is_none());
    }

    #[test]
    fn drops_record_with_negative_price() {
        assert!(normalize_product(&priced_product(Some(-1.99), None), "Kroger", 0.0).is_none());
    }

    #[test]
    fn drops_record_with_non_finite_price() {
        assert!(normalize_product(&priced_product(Some(f64::NAN), None), "Kroger", 0.0).is_none());
    }

    #[test]
    fn drops_record_with_no_items_at_all() {
        let product = Product {
            description: Some("Shelf Tag".to_string()),
            items: vec![],
            images: vec![],
        };
        assert!(normalize_product(&product, "Kroger", 0.0).is_none());
    }

    #[test]
    fn missing_size_defaults_to_unit_quantity() {
        let item = normalize_product(&priced_product(Some(2.0), None), "Kroger", 0.0)
            .expect("expected an item");
        assert!((item.quantity - 1.0).abs() < 1e-9);
        assert_eq!(item.unit_of_measure, "");
    }

    #[test]
    fn image_comes_from_second_gallery_entry() {
        let mut product = priced_product(Some(3.49), Some("1 GAL"));
        product.images = vec![
            ProductImage {
                perspective: Some("front".to_string()),
                sizes: vec![ImageSize {
                    size: Some("large".to_string()),
                    url: Some("https://img.example/front.jpg".to_string()),
                }],
            },
            ProductImage {
                perspective: Some("back".to_string()),
                sizes: vec![
                    ImageSize {
                        size: Some("medium".to_string()),
                        url: Some("https://img.example/back-medium.jpg".to_string()),
                    },
                    ImageSize {
                        size: Some("small".to_string()),
                        url: Some("https://img.example/back-small.jpg".to_string()),
                    },
                ],
            },
        ];
        let item = normalize_product(&product, "Kroger", 0.0).expect("expected an item");
        assert_eq!(
            item.image_url.as_deref(),
            Some("https://img.example/back-medium.jpg")
        );
    }

    #[test]
    fn single_gallery_entry_yields_no_image() {
        let mut product = priced_product(Some(3.49), None);
        product.images = vec![ProductImage {
            perspective: Some("front".to_string()),
            sizes: vec![ImageSize {
                size: None,
                url: Some("https://img.example/front.jpg".to_string()),
            }],
        }];
        let item = normalize_product(&product, "Kroger", 0.0).expect("expected an item");
        assert!(item.image_url.is_none());
    }

    #[test]
    fn second_gallery_entry_without_sizes_yields_no_image() {
        let mut product = priced_product(Some(3.49), None);
        product.images = vec![
            ProductImage {
                perspective: None,
                sizes: vec![],
            },
            ProductImage {
                perspective: None,
                sizes: vec![],
            },
        ];
        let item = normalize_product(&product, "Kroger", 0.0).expect("expected an item");
        assert!(item.image_url.is_none());
    }

    #[test]
    fn missing_description_yields_empty_name() {
        let mut product = priced_product(Some(1.0), None);
        product.description = None;
        let item = normalize_product(&product, "Kroger", 0.0).expect("expected an item");
        assert_eq!(item.name, "");
    }
}
