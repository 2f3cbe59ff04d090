//! Infrastructure layer
//!
//! This module handles the outside world:
//! - Terminal foundation (real and in-memory)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
