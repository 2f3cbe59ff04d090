//! Domain logic
//!
//! This module contains the news domain:
//! - Post records and their metadata
//! - The validated catalog of posts shown on the home screen
//! - Text fitting utilities used by the card renderer

pub mod catalog;
pub mod post;
pub mod text;
