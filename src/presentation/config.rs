//! UI configuration
//!
//! This module contains configuration for UI appearance and behavior.

pub mod keybindings;
pub mod strings;
pub mod styles;
pub mod thumbnails;

// Re-export for convenience
pub use keybindings::KeyBindings;
pub use strings::Strings;
pub use styles::Styles;
pub use thumbnails::Thumbnails;
