//! Cart store.
//!
//! Line items plus an optional active promo code, with derived totals
//! recomputed on every read. Every mutation persists the full cart and promo
//! code through the storage boundary; load-time initializes from storage or an
//! empty default.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{validate_promo_code, Product, PromoCode};
use crate::storage::Storage;

const CART_KEY: &str = "cart";
const PROMO_KEY: &str = "promoCode";

/// A product snapshot in the cart. Lines are keyed by
/// `(product id, selected_color, selected_size)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }

    fn same_variant(&self, id: u64, color: &Option<String>, size: &Option<String>) -> bool {
        self.product.id == id && self.selected_color == *color && self.selected_size == *size
    }
}

#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    promo: Option<PromoCode>,
    storage: Arc<Storage>,
}

impl CartStore {
    pub fn load(storage: Arc<Storage>) -> Self {
        let items = storage.get(CART_KEY, Vec::new());
        let promo = storage.get(PROMO_KEY, None);
        Self {
            items,
            promo,
            storage,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn promo_code(&self) -> Option<&PromoCode> {
        self.promo.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_in_cart(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.product.id == id)
    }

    /// Adds `quantity` of a product variant. An existing line with the same
    /// `(id, color, size)` key has its quantity incremented; otherwise a new
    /// line is appended. Stock is not checked here; that is the caller's
    /// concern. Adding zero is a no-op.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<String>,
        size: Option<String>,
    ) {
        if quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.same_variant(product.id, &color, &size))
        {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity,
                selected_color: color,
                selected_size: size,
            }),
        }
        self.persist();
    }

    /// Removes every variant line of the product. A cart row stands for all
    /// variants of a product; there is no variant-level removal.
    pub fn remove_item(&mut self, id: u64) {
        self.items.retain(|item| item.product.id != id);
        self.persist();
    }

    /// Overwrites the quantity of every line of the product; a quantity of
    /// zero behaves exactly like [`remove_item`](Self::remove_item).
    pub fn set_quantity(&mut self, id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        for item in self.items.iter_mut().filter(|item| item.product.id == id) {
            item.quantity = quantity;
        }
        self.persist();
    }

    /// Empties the cart and drops any active promo code in one state change.
    pub fn clear(&mut self) {
        self.items.clear();
        self.promo = None;
        self.persist();
    }

    /// Applies a promo code by case-sensitive exact match. Returns `false`
    /// and leaves state unchanged when the code is unknown.
    pub fn apply_promo_code(&mut self, code: &str) -> bool {
        match validate_promo_code(code) {
            Some(promo) => {
                debug!(code, "promo code applied");
                self.promo = Some(promo);
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn remove_promo_code(&mut self) {
        self.promo = None;
        self.persist();
    }

    /// Sum of line quantities.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of price x quantity over all lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Promo percentage of the subtotal, or zero with no active promo.
    pub fn discount(&self) -> f64 {
        match &self.promo {
            Some(promo) => self.subtotal() * promo.discount_percent / 100.0,
            None => 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount()
    }

    fn persist(&self) {
        self.storage.set(CART_KEY, &self.items);
        self.storage.set(PROMO_KEY, &self.promo);
    }
}
