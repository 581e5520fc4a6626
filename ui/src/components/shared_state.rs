use dioxus::prelude::*;

use remate_common::config::AppConfig;
use remate_common::store::FixtureStore;

/// Marketplace data shared across all components.
///
/// Seeded from the fixtures on every page load; mutations (new listings,
/// wishlist edits, chat messages) live until the tab is closed.
#[derive(Clone, Debug)]
pub struct SharedState {
    pub store: FixtureStore,
    pub config: AppConfig,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: FixtureStore::seed(),
            config,
        }
    }
}

/// Config from the optional `remate_config` storage entry, else defaults.
pub fn load_config() -> AppConfig {
    let Some(raw) = super::session_state::BrowserStorage::read_key("remate_config") else {
        return AppConfig::default();
    };
    AppConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!("ignoring malformed remate_config: {err}");
        AppConfig::default()
    })
}

pub fn use_shared_state() -> Signal<SharedState> {
    use_context::<Signal<SharedState>>()
}
