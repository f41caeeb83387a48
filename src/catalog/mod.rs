//! Remote catalog client.
//!
//! Thin wrapper over the product catalog REST API. Every call is a single
//! attempt with no retry or backoff; any transport error or non-success status
//! surfaces as a generic fetch failure and the caller owns user-facing
//! messaging. Sorting is applied client-side after the fetch.

mod mock;
mod types;

pub use mock::{featured_categories, promo_codes, validate_promo_code};
pub use types::{
    Category, Product, ProductPage, ProductQuery, ProductSort, PromoCode, SortKey, SortOrder,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::{Result, StorefrontError};

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&Config::from_env())
    }

    /// `GET /products`, `GET /products/search?q=`, or
    /// `GET /products/category/{cat}` depending on the query, with pagination
    /// parameters and post-fetch sorting.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage> {
        let (url, params) = self.request_url(query);
        let mut page: ProductPage = self.fetch_json(&url, &params).await?;
        if let Some(sort) = query.sort {
            sort_products(&mut page.products, sort);
        }
        Ok(page)
    }

    /// `GET /products/{id}`.
    pub async fn get_product(&self, id: u64) -> Result<Product> {
        let url = format!("{}/products/{id}", self.base_url);
        self.fetch_json(&url, &[]).await
    }

    /// `GET /products/categories`.
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/products/categories", self.base_url);
        self.fetch_json(&url, &[]).await
    }

    pub async fn list_by_category(&self, category: &str) -> Result<ProductPage> {
        let query = ProductQuery {
            category: Some(category.to_string()),
            ..ProductQuery::default()
        };
        self.list_products(&query).await
    }

    /// Products from the same category, excluding the current one, capped at
    /// `limit` (4 matches the original storefront's related-items strip).
    pub async fn related_products(
        &self,
        category: &str,
        exclude_id: u64,
        limit: usize,
    ) -> Result<Vec<Product>> {
        let page = self.list_by_category(category).await?;
        Ok(pick_related(page.products, exclude_id, limit))
    }

    fn request_url(&self, query: &ProductQuery) -> (String, Vec<(String, String)>) {
        let mut params = Vec::new();
        if let Some(limit) = query.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(skip) = query.skip {
            params.push(("skip".to_string(), skip.to_string()));
        }
        let mut url = format!("{}/products", self.base_url);
        if let Some(q) = &query.search {
            url = format!("{}/products/search", self.base_url);
            params.push(("q".to_string(), q.clone()));
        }
        if let Some(category) = &query.category {
            url = format!("{}/products/category/{category}", self.base_url);
        }
        (url, params)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        debug!(url, "catalog request");
        let mut request = self.http.get(url).timeout(self.timeout);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "catalog request failed");
            return Err(StorefrontError::FetchStatus(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Sorts in place by the given key: string fields lexically, numeric fields
/// numerically, ascending unless `Desc`.
pub fn sort_products(products: &mut [Product], sort: ProductSort) {
    products.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Brand => a.brand.cmp(&b.brand),
            SortKey::Category => a.category.cmp(&b.category),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Stock => a.stock.cmp(&b.stock),
            SortKey::DiscountPercentage => a.discount_percentage.total_cmp(&b.discount_percentage),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn pick_related(products: Vec<Product>, exclude_id: u64, limit: usize) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.id != exclude_id)
        .take(limit)
        .collect()
}
