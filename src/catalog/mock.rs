//! Static storefront data: featured categories and promo codes.

use super::types::{Category, PromoCode};

/// Featured categories shown on the home page, with curated images the remote
/// API does not provide.
pub fn featured_categories() -> Vec<Category> {
    [
        ("smartphones", "Smartphones", "https://images.pexels.com/photos/404280/pexels-photo-404280.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ("laptops", "Laptops", "https://images.pexels.com/photos/18105/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ("fragrances", "Fragrances", "https://images.pexels.com/photos/965989/pexels-photo-965989.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ("skincare", "Skincare", "https://images.pexels.com/photos/3321416/pexels-photo-3321416.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ("home-decoration", "Home Decoration", "https://images.pexels.com/photos/4846097/pexels-photo-4846097.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
        ("furniture", "Furniture", "https://images.pexels.com/photos/1866149/pexels-photo-1866149.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"),
    ]
    .iter()
    .map(|(id, name, image)| Category {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
    })
    .collect()
}

/// The fixed promo code list.
pub fn promo_codes() -> Vec<PromoCode> {
    [
        ("WELCOME10", 10.0, "10% off your first order"),
        ("SUMMER25", 25.0, "25% off summer collection"),
        ("FREESHIP", 15.0, "Free shipping on orders over $50"),
    ]
    .iter()
    .map(|(code, discount_percent, description)| PromoCode {
        code: code.to_string(),
        discount_percent: *discount_percent,
        description: description.to_string(),
    })
    .collect()
}

/// Case-sensitive exact match against the promo list.
pub fn validate_promo_code(code: &str) -> Option<PromoCode> {
    promo_codes().into_iter().find(|promo| promo.code == code)
}
