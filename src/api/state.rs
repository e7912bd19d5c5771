use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::{CatalogStore, TfIdfVectorizer, ENGLISH_STOP_WORDS};

/// Shared application state
///
/// Each server owns its catalog; handlers reach it only through this state.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    /// Used when a recommendation request carries no `top_n`
    pub default_top_n: usize,
    pub english_stop_words: bool,
}

/// Inner state that can be modified
///
/// Recommendation runs hold the read lock for their whole duration, so an
/// append waits until no run is in flight.
pub struct AppStateInner {
    pub catalog: CatalogStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new empty application state
    pub fn new() -> Self {
        Self::with_catalog(CatalogStore::new())
    }

    /// Creates state around an existing catalog with default settings
    pub fn with_catalog(catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner { catalog })),
            default_top_n: 5,
            english_stop_words: false,
        }
    }

    /// Creates state from loaded configuration
    pub fn from_config(config: &Config, catalog: CatalogStore) -> Self {
        Self {
            default_top_n: config.default_top_n,
            english_stop_words: config.english_stop_words,
            ..Self::with_catalog(catalog)
        }
    }

    /// Vectorizer matching the configured stop-word policy
    pub fn vectorizer(&self) -> TfIdfVectorizer {
        if self.english_stop_words {
            TfIdfVectorizer::with_stop_words(ENGLISH_STOP_WORDS)
        } else {
            TfIdfVectorizer::new()
        }
    }
}
