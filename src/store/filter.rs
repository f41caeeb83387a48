//! Filter, sort, and debounced search state.
//!
//! Session-scoped (never persisted). The debounced search value is the one
//! piece of timing behavior in the crate: a keystroke updates the raw text
//! immediately and schedules a commit after a quiet window; a newer keystroke
//! within the window aborts the pending commit and restarts the timer, so only
//! the most recent value is ever committed.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{Product, ProductSort, SortKey};
use crate::config::Config;

/// Optional AND-combined predicates. Absent keys impose no constraint.
/// `category` drives which endpoint is fetched rather than a client-side
/// predicate; the rest are applied by [`apply_filters`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSet {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub brand: Option<String>,
    pub min_rating: Option<f64>,
    pub in_stock_only: bool,
}

/// A single-key merge into the current [`FilterSet`].
#[derive(Clone, Debug, PartialEq)]
pub enum FilterUpdate {
    Category(Option<String>),
    MinPrice(Option<f64>),
    MaxPrice(Option<f64>),
    Brand(Option<String>),
    MinRating(Option<f64>),
    InStockOnly(bool),
}

/// User-facing sort selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Rating: High to Low",
        }
    }

    /// The post-fetch sort this selection maps to; `Relevance` keeps the
    /// remote API's ordering.
    pub fn product_sort(&self) -> Option<ProductSort> {
        match self {
            Self::Relevance => None,
            Self::PriceAsc => Some(ProductSort::asc(SortKey::Price)),
            Self::PriceDesc => Some(ProductSort::desc(SortKey::Price)),
            Self::RatingDesc => Some(ProductSort::desc(SortKey::Rating)),
        }
    }
}

#[derive(Debug)]
pub struct FilterStore {
    filters: FilterSet,
    sort: SortOption,
    search_query: String,
    debounce: Duration,
    committed_tx: watch::Sender<String>,
    committed_rx: watch::Receiver<String>,
    pending: Option<JoinHandle<()>>,
}

impl FilterStore {
    pub fn new(debounce: Duration) -> Self {
        let (committed_tx, committed_rx) = watch::channel(String::new());
        Self {
            filters: FilterSet::default(),
            sort: SortOption::default(),
            search_query: String::new(),
            debounce,
            committed_tx,
            committed_rx,
            pending: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.search_debounce)
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Replaces the filter set wholesale.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    /// Merges a single key into the filter set.
    pub fn update_filter(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Category(category) => self.filters.category = category,
            FilterUpdate::MinPrice(min_price) => self.filters.min_price = min_price,
            FilterUpdate::MaxPrice(max_price) => self.filters.max_price = max_price,
            FilterUpdate::Brand(brand) => self.filters.brand = brand,
            FilterUpdate::MinRating(min_rating) => self.filters.min_rating = min_rating,
            FilterUpdate::InStockOnly(in_stock_only) => self.filters.in_stock_only = in_stock_only,
        }
    }

    /// Resets filters, sort, and both raw and debounced search text. Any
    /// pending debounce commit is aborted and the empty value is committed
    /// immediately.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSet::default();
        self.sort = SortOption::default();
        self.search_query.clear();
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let _ = self.committed_tx.send(String::new());
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// The raw search text, updated on every keystroke.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The last committed (debounced) search text.
    pub fn debounced_query(&self) -> String {
        self.committed_rx.borrow().clone()
    }

    /// A receiver that observes debounced commits as they land.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.committed_tx.subscribe()
    }

    /// Updates the raw text immediately and schedules the debounced commit.
    /// Must be called within a tokio runtime.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.search_query = query.clone();
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let tx = self.committed_tx.clone();
        let quiet = self.debounce;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            let _ = tx.send(query);
        }));
    }
}

impl Drop for FilterStore {
    // A commit landing after the store is gone would be an update after
    // teardown; abort it with the store.
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

/// Applies the client-side predicates in order: price >= min, price <= max,
/// brand equality, rating >= threshold, stock > 0. Operates on whatever page
/// of results has been fetched; it does not refetch, so it cannot see items
/// beyond that page.
pub fn apply_filters(products: &[Product], filters: &FilterSet) -> Vec<Product> {
    products
        .iter()
        .filter(|product| {
            filters.min_price.map_or(true, |min| product.price >= min)
                && filters.max_price.map_or(true, |max| product.price <= max)
                && filters
                    .brand
                    .as_ref()
                    .map_or(true, |brand| &product.brand == brand)
                && filters
                    .min_rating
                    .map_or(true, |rating| product.rating >= rating)
                && (!filters.in_stock_only || product.stock > 0)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64, brand: &str, rating: f64, stock: u32) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price,
            discount_percentage: 0.0,
            rating,
            stock,
            brand: brand.to_string(),
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: vec![],
        }
    }

    #[test]
    fn max_price_excludes_only_above() {
        let products = vec![
            product(1, 10.0, "a", 4.0, 1),
            product(2, 20.0, "a", 4.0, 1),
            product(3, 30.0, "a", 4.0, 1),
        ];
        let filters = FilterSet {
            max_price: Some(25.0),
            ..FilterSet::default()
        };
        let result = apply_filters(&products, &filters);
        let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn predicates_and_combine() {
        let products = vec![
            product(1, 15.0, "Acme", 4.5, 3),
            product(2, 15.0, "Acme", 3.0, 3),
            product(3, 15.0, "Other", 4.5, 3),
            product(4, 15.0, "Acme", 4.5, 0),
        ];
        let filters = FilterSet {
            brand: Some("Acme".to_string()),
            min_rating: Some(4.0),
            in_stock_only: true,
            ..FilterSet::default()
        };
        let result = apply_filters(&products, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn empty_filter_set_passes_everything() {
        let products = vec![product(1, 1.0, "", 0.0, 0)];
        assert_eq!(apply_filters(&products, &FilterSet::default()).len(), 1);
    }

    #[test]
    fn single_key_merge() {
        let mut store = FilterStore::new(Duration::from_millis(500));
        store.update_filter(FilterUpdate::MinPrice(Some(5.0)));
        store.update_filter(FilterUpdate::Brand(Some("Acme".to_string())));
        assert_eq!(store.filters().min_price, Some(5.0));
        assert_eq!(store.filters().brand.as_deref(), Some("Acme"));
        store.update_filter(FilterUpdate::Brand(None));
        assert_eq!(store.filters().brand, None);
        assert_eq!(store.filters().min_price, Some(5.0));
    }

    #[test]
    fn sort_option_mapping() {
        assert_eq!(SortOption::Relevance.product_sort(), None);
        assert_eq!(
            SortOption::PriceDesc.product_sort(),
            Some(ProductSort::desc(SortKey::Price))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_keystrokes_commit_only_latest() {
        let mut store = FilterStore::new(Duration::from_millis(500));
        let mut rx = store.subscribe();

        store.set_search_query("a");
        store.set_search_query("ap");
        store.set_search_query("app");

        assert_eq!(store.search_query(), "app");
        assert_eq!(store.debounced_query(), "");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "app");
        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.debounced_query(), "app");
    }

    #[tokio::test(start_paused = true)]
    async fn separate_quiet_windows_commit_separately() {
        let mut store = FilterStore::new(Duration::from_millis(500));
        let mut rx = store.subscribe();

        store.set_search_query("watch");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "watch");

        store.set_search_query("watches");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "watches");
    }

    #[tokio::test(start_paused = true)]
    async fn clear_resets_everything() {
        let mut store = FilterStore::new(Duration::from_millis(500));
        store.update_filter(FilterUpdate::MaxPrice(Some(100.0)));
        store.set_sort(SortOption::PriceAsc);
        store.set_search_query("phone");

        store.clear_filters();

        assert_eq!(*store.filters(), FilterSet::default());
        assert_eq!(store.sort(), SortOption::Relevance);
        assert_eq!(store.search_query(), "");
        assert_eq!(store.debounced_query(), "");

        // The aborted commit never lands.
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(store.debounced_query(), "");
    }
}
