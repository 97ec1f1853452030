//! Core domain types shared by the extractor, scorers and bundle state.

pub mod product;

pub use product::{cart_total, CartItem, Product, MAX_RATING};
