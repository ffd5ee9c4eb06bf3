use std::sync::Arc;

use marquee_core::suggest::SuggestConfig;
use marquee_core::{Config, MetadataCatalog, PreferenceStore, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    catalog: Arc<dyn MetadataCatalog>,
    prefs: PreferenceStore,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Arc<dyn MetadataCatalog>,
        prefs: PreferenceStore,
    ) -> Self {
        Self {
            config,
            catalog,
            prefs,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> Arc<dyn MetadataCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }

    pub fn suggest_config(&self) -> SuggestConfig {
        SuggestConfig::from(&self.config.suggestions)
    }
}
