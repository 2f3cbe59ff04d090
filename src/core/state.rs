use crate::{domain::catalog::Catalog, domain::post::Post, infrastructure::config::Config};

pub mod dialog;
pub mod feed;
pub mod system;

pub use dialog::DialogState;
pub use feed::FeedState;
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub feed: FeedState,
    pub dialog: DialogState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState for the given catalog with an empty config
    pub fn new(catalog: Catalog) -> Self {
        Self::new_with_config(catalog, Config::default())
    }

    /// Initialize AppState with the specified catalog and config
    pub fn new_with_config(catalog: Catalog, config: Config) -> Self {
        let feed = FeedState::new(catalog.len());
        Self {
            catalog,
            feed,
            dialog: DialogState::default(),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    /// Get the post behind the focused card
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.selected().and_then(|i| self.catalog.get(i))
    }
}
