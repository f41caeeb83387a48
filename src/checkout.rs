//! Checkout: form validation and simulated order placement.
//!
//! There is no payment integration; placing an order validates the form,
//! stands in for the processor round trip with a timed delay, and clears the
//! cart. The returned receipt captures the priced line items and totals at
//! placement time.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::store::{CartItem, CartStore};
use crate::{Result, StorefrontError};

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[validate(length(min = 2, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(length(min = 10, message = "Please enter your full address"))]
    pub address: String,
    #[validate(length(min = 2, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 2, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 5, message = "Invalid ZIP code"))]
    pub zip_code: String,
}

/// 10 to 15 digits, with an optional leading `+`.
fn validate_phone(phone: &str) -> std::result::Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("phone");
        error.message = Some("Invalid phone number".into());
        Err(error)
    }
}

/// Receipt for a placed order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub email: String,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub placed_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct CheckoutService {
    payment_delay: Duration,
}

impl Default for CheckoutService {
    fn default() -> Self {
        Self {
            payment_delay: Duration::from_secs(2),
        }
    }
}

impl CheckoutService {
    pub fn new(payment_delay: Duration) -> Self {
        Self { payment_delay }
    }

    /// Validates the form, simulates the payment processor, clears the cart
    /// (which also drops any active promo), and returns the receipt.
    pub async fn place_order(&self, form: &CheckoutForm, cart: &mut CartStore) -> Result<Order> {
        form.validate()?;
        if cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let items = cart.items().to_vec();
        let subtotal = cart.subtotal();
        let discount = cart.discount();
        let total = cart.total();

        tokio::time::sleep(self.payment_delay).await;

        let id = Uuid::new_v4();
        let order = Order {
            id,
            order_number: format!("ORD-{:08X}", id.as_fields().0),
            email: form.email.clone(),
            items,
            subtotal,
            discount,
            total,
            placed_at: Utc::now(),
        };
        cart.clear();
        info!(order_number = %order.order_number, total = order.total, "order placed");
        Ok(order)
    }
}
