//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The home screen component
//! - Reusable widgets
//! - Configuration (styles, keybindings, strings, thumbnails)

pub mod components;
pub mod config;
pub mod widgets;
