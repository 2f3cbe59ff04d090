//! Integration layer
//!
//! Wires the Elm core, the terminal and the presentation layer together.

pub mod app_runner;
