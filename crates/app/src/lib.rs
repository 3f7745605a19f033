//! Shared application domain and storage modules.

pub mod context;
pub mod domain;
pub mod fixtures;
pub mod storage;
pub mod uuids;

#[cfg(test)]
mod test;
