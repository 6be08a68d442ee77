//! Products module - domain models, services, and traits.

mod products_model;
mod products_service;
mod products_traits;

#[cfg(test)]
mod products_model_tests;

pub use products_model::{NewProduct, Product};
pub use products_service::ProductService;
pub use products_traits::{ProductRepositoryTrait, ProductServiceTrait};
