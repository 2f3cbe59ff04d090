use serde::{Deserialize, Serialize};

/// Process lifecycle and status line messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    UpdateStatusMessage(String),
    ClearStatusMessage,
    /// Shown on the status line prefixed with `Error:`.
    ShowError(String),
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_status_message_survives_json() -> Result<()> {
        let msg = SystemMsg::UpdateStatusMessage("No card selected".to_string());
        let json = serde_json::to_string(&msg)?;

        assert_eq!(json, r#"{"UpdateStatusMessage":"No card selected"}"#);
        assert_eq!(serde_json::from_str::<SystemMsg>(&json)?, msg);
        Ok(())
    }

    #[test]
    fn test_resize_carries_dimensions() {
        assert_ne!(SystemMsg::Resize(80, 24), SystemMsg::Resize(24, 80));
    }
}
