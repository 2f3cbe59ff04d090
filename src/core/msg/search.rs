use serde::{Deserialize, Serialize};

/// Messages for the search field on top of the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMsg {
    QueryChanged(String),
}
