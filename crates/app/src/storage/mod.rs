//! Storage collaborators

use std::error::Error as StdError;

use thiserror::Error;
use uuid::Uuid;

mod memory;

pub use memory::MemoryStore;

/// Failure reported by a storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record {0} does not exist")]
    Missing(Uuid),

    #[error("record {0} belongs to another owner")]
    Conflict(Uuid),

    #[error("storage backend unavailable")]
    Unavailable(#[source] Box<dyn StdError + Send + Sync>),
}
