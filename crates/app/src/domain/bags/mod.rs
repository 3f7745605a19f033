//! Bags

pub mod errors;
pub mod models;
pub mod repositories;
pub mod service;

pub use errors::BagsServiceError;
pub use service::*;
