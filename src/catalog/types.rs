//! Catalog wire and query types.

use serde::{Deserialize, Serialize};

/// A catalog product as returned by the remote API. Immutable once fetched;
/// consumers treat it as read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Pagination envelope returned by every list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// A featured category (static data; the remote API only knows category slugs).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// A promotional discount code. Matched case-sensitively against the static
/// promo list; at most one is active per cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromoCode {
    pub code: String,
    #[serde(rename = "discount")]
    pub discount_percent: f64,
    pub description: String,
}

/// Query parameters for product list fetches. A search term switches the
/// request to the search endpoint; a category switches it to the category
/// endpoint (and takes precedence over search).
#[derive(Clone, Debug, Default)]
pub struct ProductQuery {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    /// Applied client-side after the fetch.
    pub sort: Option<ProductSort>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl ProductSort {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Desc,
        }
    }
}

/// Product field to sort by. String fields compare lexically, numeric fields
/// numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Brand,
    Category,
    Price,
    Rating,
    Stock,
    DiscountPercentage,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_from_api_json() {
        let json = r#"{
            "id": 1,
            "title": "iPhone 9",
            "description": "An apple mobile which is nothing like apple",
            "price": 549,
            "discountPercentage": 12.96,
            "rating": 4.69,
            "stock": 94,
            "brand": "Apple",
            "category": "smartphones",
            "thumbnail": "https://example.com/thumb.jpg",
            "images": ["https://example.com/1.jpg"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.discount_percentage, 12.96);
        assert_eq!(product.stock, 94);
    }

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let json = r#"{"id": 2, "title": "Generic", "price": 10.5, "category": "misc"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.brand.is_empty());
        assert!(product.images.is_empty());
        assert_eq!(product.rating, 0.0);
    }

    #[test]
    fn promo_code_uses_wire_field_name() {
        let json = r#"{"code": "WELCOME10", "discount": 10, "description": "10% off"}"#;
        let promo: PromoCode = serde_json::from_str(json).unwrap();
        assert_eq!(promo.discount_percent, 10.0);
    }
}
