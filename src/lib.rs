//! # hellonews - a news reader demo for the terminal
//!
//! Shows a fixed catalog of news stories (a hero article, secondary articles
//! and audio stories) with ratatui. Activating a card opens a modal dialog.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects for the runner
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use hellonews::core::{
//!     msg::{dialog::DialogMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use hellonews::domain::catalog::Catalog;
//!
//! # fn main() -> Result<(), hellonews::domain::catalog::CatalogError> {
//! let state = AppState::new(Catalog::sample()?);
//! let title = state.catalog.hero().title.clone();
//!
//! let (state, _cmds) = update(
//!     Msg::Dialog(DialogMsg::Open { title: title.clone(), body: "Card Tapped".into() }),
//!     state,
//! );
//!
//! assert!(state.dialog.is_open());
//! assert_eq!(state.dialog.title(), title);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Posts and the catalog
//! - [`core`] - Elm architecture: state, messages, update, commands
//! - [`presentation`] - Widgets, the home screen, UI configuration
//! - [`infrastructure`] - Terminal, CLI and configuration loading
//! - [`integration`] - The application runner
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState};
pub use crate::core::{translator::translate_raw_to_domain, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
