use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Terminal and timer input before it is given a meaning.
///
/// `translate_raw_to_domain` turns these into [`Msg`](super::msg::Msg)s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,
    Key(KeyEvent),
    /// The input source failed; carries a description for the status line.
    Error(String),
}

impl RawMsg {
    /// Timer driven messages, too noisy to log one by one.
    pub fn is_periodic(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
