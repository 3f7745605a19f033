//! Bag Handlers

pub(crate) mod close;
pub(crate) mod get;
