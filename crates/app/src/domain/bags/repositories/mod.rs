//! Bag Repositories

mod bags;
mod items;

pub use bags::*;
pub use items::*;
