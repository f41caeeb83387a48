//! Formatting and presentation helpers.

use crate::catalog::Product;

/// Formats a price as USD with thousands separators, e.g. `$1,234.50`.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Price after applying a percentage discount.
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    price * (1.0 - discount_percentage / 100.0)
}

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{cut}...")
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders a 0-5 rating as full, half, and empty stars, e.g. `★★★½☆`.
pub fn star_rating(rating: f64) -> String {
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    let empty = 5usize.saturating_sub(full + half as usize);
    format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "½" } else { "" },
        "☆".repeat(empty)
    )
}

/// Distinct brands in first-seen order, skipping products without one.
pub fn unique_brands(products: &[Product]) -> Vec<String> {
    let mut brands = Vec::new();
    for product in products {
        if !product.brand.is_empty() && !brands.contains(&product.brand) {
            brands.push(product.brand.clone());
        }
    }
    brands
}

/// Size variants offered for a category; empty when sizes do not apply.
pub fn sizes_for_category(category: &str) -> &'static [&'static str] {
    match category {
        "clothing" | "tops" | "shirts" | "womens-dresses" | "womens-shoes" | "mens-shirts" => {
            &["XS", "S", "M", "L", "XL"]
        }
        "shoes" | "mens-shoes" => &["38", "39", "40", "41", "42", "43", "44", "45"],
        _ => &[],
    }
}

/// Color swatches offered for a category, as hex values.
pub fn colors_for_category(category: &str) -> &'static [&'static str] {
    match category {
        "smartphones" | "laptops" => &["#000000", "#FFFFFF", "#C0C0C0", "#FFC0CB"],
        _ => &["#000000", "#FFFFFF", "#FF0000", "#0000FF", "#808080"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(0.99), "$0.99");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn discount_math() {
        assert_eq!(discounted_price(200.0, 25.0), 150.0);
        assert_eq!(discounted_price(99.0, 0.0), 99.0);
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longer...");
    }

    #[test]
    fn stars() {
        assert_eq!(star_rating(3.5), "★★★½☆");
        assert_eq!(star_rating(5.0), "★★★★★");
        assert_eq!(star_rating(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize("laptops"), "Laptops");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn category_variants() {
        assert_eq!(sizes_for_category("mens-shirts").len(), 5);
        assert!(sizes_for_category("smartphones").is_empty());
        assert_eq!(colors_for_category("laptops").len(), 4);
    }
}
