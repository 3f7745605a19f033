//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::Path,
    sync::Arc,
};

use thiserror::Error;

use crate::{
    domain::bags::{BagsService, RepositoryBagsService},
    fixtures::{CatalogFixture, FixtureError},
    storage::MemoryStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog fixture")]
    Catalog(#[source] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub bags: Arc<dyn BagsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(bags: Arc<dyn BagsService>) -> Self {
        Self { bags }
    }

    /// Build application context over an in-memory store.
    #[must_use]
    pub fn in_memory(store: &MemoryStore) -> Self {
        Self::new(Arc::new(RepositoryBagsService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )))
    }

    /// Build application context over an in-memory store, seeded from a
    /// catalog fixture when a path is given.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read, parsed or stored.
    pub async fn from_catalog(path: Option<&Path>) -> Result<Self, AppInitError> {
        let store = MemoryStore::new();

        if let Some(path) = path {
            CatalogFixture::from_path(path)
                .map_err(AppInitError::Catalog)?
                .load_into(&store)
                .await
                .map_err(AppInitError::Catalog)?;
        }

        Ok(Self::in_memory(&store))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
