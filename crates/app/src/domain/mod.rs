//! Sacola Domain Concerns

pub mod bags;
pub mod products;
