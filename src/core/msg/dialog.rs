use serde::{Deserialize, Serialize};

/// Messages specific to DialogState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogMsg {
    /// Show the dialog, replacing any title/body currently displayed.
    Open { title: String, body: String },
    /// The confirm button was pressed.
    Confirm,
    /// A dismiss gesture outside the confirm button (Esc). Ignored.
    DismissRequest,
}
