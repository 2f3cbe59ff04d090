use serde::{Deserialize, Serialize};

pub mod dialog;
pub mod feed;
pub mod search;
pub mod system;

use dialog::DialogMsg;
use feed::FeedMsg;
use search::SearchMsg;
use system::SystemMsg;

/// Domain messages representing user intent on the home screen.
/// These are processed by the update function and never carry terminal types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Card focus and card menus (delegated to FeedState)
    Feed(FeedMsg),

    // The screen-wide dialog (delegated to DialogState)
    Dialog(DialogMsg),

    // The decorative search field
    Search(SearchMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(Msg::Feed(FeedMsg::ScrollUp), Msg::Feed(FeedMsg::ScrollUp));
        assert_ne!(Msg::Feed(FeedMsg::ScrollUp), Msg::Feed(FeedMsg::ScrollDown));
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::Dialog(DialogMsg::Open {
            title: "Creating Butterflies With New Transparent Ink".to_string(),
            body: "Card Tapped".to_string(),
        });
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
