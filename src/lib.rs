//! Headless Storefront Data Layer
//!
//! Client-side state management for an e-commerce storefront built over a
//! third-party product catalog API. There is no backend of its own: catalog
//! data is fetched from the remote API, and cart/wishlist state is persisted
//! as JSON through a local storage boundary.
//!
//! ## Features
//! - Product catalog client (list, search, categories, related products)
//! - Shopping cart with promo codes and derived totals
//! - Wishlist
//! - Client-side filtering, sorting, and debounced search
//! - Simulated checkout with form validation
//!
//! The library emits `tracing` events at degradation points and leaves
//! subscriber installation to the host application.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod storage;
pub mod store;
pub mod util;

pub use catalog::{
    CatalogClient, Category, Product, ProductPage, ProductQuery, ProductSort, PromoCode, SortKey,
    SortOrder,
};
pub use checkout::{CheckoutForm, CheckoutService, Order};
pub use config::Config;
pub use storage::Storage;
pub use store::{
    apply_filters, CartItem, CartStore, FilterSet, FilterStore, FilterUpdate, SortOption,
    WishlistStore,
};

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Fetch failed with status {0}")]
    FetchStatus(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid checkout form: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Cart is empty")]
    EmptyCart,
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
