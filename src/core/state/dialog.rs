use crate::core::{cmd::Cmd, msg::dialog::DialogMsg};

/// The single dialog of the home screen.
///
/// Closed and Open(title, body) are distinguished by `visible`. Closing keeps
/// the last title and body; only a new `Open` replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    visible: bool,
    title: String,
    body: String,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Dialog-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: DialogMsg) -> Vec<Cmd> {
        match msg {
            DialogMsg::Open { title, body } => {
                // Last write wins: an open dialog is overwritten in place.
                self.title = title;
                self.body = body;
                self.visible = true;
                vec![Cmd::RequestRender]
            }
            DialogMsg::Confirm => {
                if self.visible {
                    self.visible = false;
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
            DialogMsg::DismissRequest => {
                log::debug!("dialog dismiss request ignored");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open(title: &str) -> DialogMsg {
        DialogMsg::Open {
            title: title.to_string(),
            body: "Card Tapped".to_string(),
        }
    }

    #[test]
    fn test_default_is_closed() {
        let dialog = DialogState::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.title(), "");
        assert_eq!(dialog.body(), "");
    }

    #[test]
    fn test_open() {
        let mut dialog = DialogState::default();
        let cmds = dialog.update(open("Hero"));

        assert!(dialog.is_open());
        assert_eq!(dialog.title(), "Hero");
        assert_eq!(dialog.body(), "Card Tapped");
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_second_open_overwrites() {
        let mut dialog = DialogState::default();
        dialog.update(open("First"));
        dialog.update(open("Second"));

        assert!(dialog.is_open());
        assert_eq!(dialog.title(), "Second");
    }

    #[test]
    fn test_confirm_closes_and_keeps_content() {
        let mut dialog = DialogState::default();
        dialog.update(open("Hero"));

        let cmds = dialog.update(DialogMsg::Confirm);

        assert!(!dialog.is_open());
        assert_eq!(dialog.title(), "Hero");
        assert_eq!(dialog.body(), "Card Tapped");
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_confirm_when_closed_is_noop() {
        let mut dialog = DialogState::default();
        assert!(dialog.update(DialogMsg::Confirm).is_empty());
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_dismiss_request_keeps_dialog_open() {
        let mut dialog = DialogState::default();
        dialog.update(open("Hero"));
        let before = dialog.clone();

        let cmds = dialog.update(DialogMsg::DismissRequest);

        assert_eq!(dialog, before);
        assert!(cmds.is_empty());
    }
}
