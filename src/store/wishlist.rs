//! Wishlist store.

use std::sync::Arc;

use crate::catalog::Product;
use crate::storage::Storage;

const WISHLIST_KEY: &str = "wishlist";

/// Favorited products, persisted like the cart. No derived totals.
#[derive(Debug)]
pub struct WishlistStore {
    products: Vec<Product>,
    storage: Arc<Storage>,
}

impl WishlistStore {
    pub fn load(storage: Arc<Storage>) -> Self {
        let products = storage.get(WISHLIST_KEY, Vec::new());
        Self { products, storage }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains(&self, id: u64) -> bool {
        self.products.iter().any(|product| product.id == id)
    }

    /// No-op when the product is already present.
    pub fn add(&mut self, product: &Product) {
        if self.contains(product.id) {
            return;
        }
        self.products.push(product.clone());
        self.persist();
    }

    pub fn remove(&mut self, id: u64) {
        self.products.retain(|product| product.id != id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.products.clear();
        self.persist();
    }

    fn persist(&self) {
        self.storage.set(WISHLIST_KEY, &self.products);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price: 9.99,
            discount_percentage: 0.0,
            rating: 4.5,
            stock: 5,
            brand: "Acme".to_string(),
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: vec![],
        }
    }

    #[test]
    fn add_is_idempotent() {
        let mut wishlist = WishlistStore::load(Arc::new(Storage::in_memory()));
        wishlist.add(&product(1));
        wishlist.add(&product(1));
        assert_eq!(wishlist.products().len(), 1);
        assert!(wishlist.contains(1));
    }

    #[test]
    fn remove_and_clear() {
        let mut wishlist = WishlistStore::load(Arc::new(Storage::in_memory()));
        wishlist.add(&product(1));
        wishlist.add(&product(2));
        wishlist.remove(1);
        assert!(!wishlist.contains(1));
        assert!(wishlist.contains(2));
        wishlist.clear();
        assert!(wishlist.products().is_empty());
    }

    #[test]
    fn state_survives_reload() {
        let storage = Arc::new(Storage::in_memory());
        {
            let mut wishlist = WishlistStore::load(storage.clone());
            wishlist.add(&product(3));
        }
        let reloaded = WishlistStore::load(storage);
        assert!(reloaded.contains(3));
    }
}
