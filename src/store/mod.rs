//! Client-side state stores: cart, wishlist, filter/sort/search.

pub mod cart;
pub mod filter;
pub mod wishlist;

pub use cart::{CartItem, CartStore};
pub use filter::{apply_filters, FilterSet, FilterStore, FilterUpdate, SortOption};
pub use wishlist::WishlistStore;
