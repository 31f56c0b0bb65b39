use crate::modules::branding::core::theme::{CompanyTheme, ThemeCatalog};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// The theme the kiosk is currently dressed in.
#[derive(Debug)]
pub struct ThemeSelector {
    catalog: ThemeCatalog,
    current: RwLock<CompanyTheme>,
}

impl ThemeSelector {
    /// Falls back to the first catalog theme when `default_id` is unknown.
    pub fn new(catalog: ThemeCatalog, default_id: &str) -> Self {
        let current = match catalog.find(default_id) {
            Some(theme) => theme.clone(),
            None => {
                debug!(default_id, "unknown default theme, using the first one");
                catalog.first().clone()
            }
        };
        Self {
            catalog,
            current: RwLock::new(current),
        }
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn current(&self) -> CompanyTheme {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Unknown ids leave the current theme in place and return `false`.
    pub fn select(&self, theme_id: &str) -> bool {
        let Some(theme) = self.catalog.find(theme_id) else {
            return false;
        };
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = theme.clone();
        info!(theme_id, "brand theme selected");
        true
    }
}
