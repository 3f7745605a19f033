//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog seed settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// YAML file with merchants, products and bags to load at startup
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,
}
