//! Shared read-only server state.

use interroute_core::{CatalogError, RouteCatalog, RoutePlanner};

use crate::config::Config;

#[derive(Debug)]
pub struct AppState {
    planner: RoutePlanner,
}

impl AppState {
    pub fn new(planner: RoutePlanner) -> Self {
        Self { planner }
    }

    /// Load the configured catalog, or the built-in table.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!("Loading route catalog from {}", path.display());
                RouteCatalog::from_json_file(path)?
            }
            None => RouteCatalog::builtin()?,
        };
        Ok(Self::new(RoutePlanner::new(catalog)))
    }

    pub fn planner(&self) -> &RoutePlanner {
        &self.planner
    }
}
