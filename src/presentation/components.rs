//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod home;

pub use home::HomeScreen;

/// Collection of all components
pub struct Components {
    pub home: HomeScreen,
}

impl Components {
    pub fn new() -> Self {
        Self {
            home: HomeScreen::new(),
        }
    }

    /// Render all components over the whole frame
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        self.home.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
