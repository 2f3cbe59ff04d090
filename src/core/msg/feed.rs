use serde::{Deserialize, Serialize};

/// Messages specific to FeedState. Indices are card indices, i.e. catalog positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedMsg {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Select(usize),
    Deselect,
    /// The "more actions" glyph of a card was activated.
    MenuTapped(usize),
}
