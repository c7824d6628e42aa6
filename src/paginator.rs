//! Paginator facade
//!
//! [`Paginator`] owns a configuration and runs the windowing engine and the
//! renderer against it. It holds no state between calls other than that
//! configuration; changing it requires `&mut self`, so sharing one instance
//! across threads is read-only unless the caller synchronizes.

use crate::config::PaginationConfig;
use crate::error::Result;
use crate::loader::load_values_from_str;
use crate::pagination::{self, PaginationResult};
use crate::render;
use crate::types::JsonObject;

/// Generates pagination data and HTML from a configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Create a paginator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator from a typed configuration
    pub fn with_config(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Create a paginator from a key/value bag applied over the defaults
    pub fn from_values(values: &JsonObject) -> Self {
        Self::with_config(PaginationConfig::from_values(values))
    }

    /// Create a paginator from a YAML or JSON document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(Self::from_values(&load_values_from_str(yaml)?))
    }

    /// Current configuration
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Mutable access to the configuration
    pub fn config_mut(&mut self) -> &mut PaginationConfig {
        &mut self.config
    }

    /// Merge a key/value bag into the configuration
    ///
    /// See [`PaginationConfig::apply`] for the coercion rules.
    pub fn set_configuration(&mut self, values: &JsonObject) {
        self.config.apply(values);
    }

    /// Compute the items to show without rendering them
    pub fn generate_data(
        &self,
        current_page: i64,
        total_items: i64,
        per_page: i64,
    ) -> Result<PaginationResult> {
        pagination::paginate(current_page, total_items, per_page, &self.config)
    }

    /// Compute the items to show and render them to HTML
    pub fn generate_html(&self, current_page: i64, total_items: i64, per_page: i64) -> Result<String> {
        let result = self.generate_data(current_page, total_items, per_page)?;
        render::render(&result, &self.config)
    }

    /// Number of pages needed for `total_items`, `ceil(max(total, 0) / max(per_page, 1))`
    pub fn count_pages(total_items: i64, per_page: i64) -> u64 {
        pagination::count_pages(total_items, per_page)
    }

    /// Page containing the 1-based `item_index`, `ceil(max(index, 0) / max(per_page, 1))`
    pub fn locate_item_in_page(per_page: i64, item_index: i64) -> u64 {
        pagination::locate_item_in_page(per_page, item_index)
    }
}
