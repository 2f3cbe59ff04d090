use serde::{Deserialize, Serialize};

/// Terminal operations the runner performs on behalf of `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by `update`, executed by the runner in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    Tui(TuiCommand),
    /// Redraw once the current event has been handled
    RequestRender,
}
