//! Reusable UI widgets
//!
//! Stateless widgets composed by the home screen.

pub mod alert_dialog;
pub mod news_card;
pub mod scrollable_list;
pub mod search_bar;
pub mod section_title;
pub mod status_bar;
pub mod thumbnail;
