use crate::{
    core::{cmd::Cmd, msg::feed::FeedMsg},
    presentation::widgets::scrollable_list::ScrollableList,
};

/// Focus over the cards of the home screen.
/// Card indices are catalog positions: hero first, then articles, then audio.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    selected: Option<usize>,
    card_count: usize,
}

impl FeedState {
    pub fn new(card_count: usize) -> Self {
        Self {
            selected: None,
            card_count,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.card_count
    }

    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }

    /// Focus a card. Out of range indices are ignored.
    pub fn select_card(&mut self, index: usize) -> bool {
        if index < self.card_count {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Feed-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        let before = self.selected;

        match msg {
            FeedMsg::ScrollUp => self.scroll_up(),
            FeedMsg::ScrollDown => self.scroll_down(),
            FeedMsg::ScrollToTop => self.scroll_to_top(),
            FeedMsg::ScrollToBottom => self.scroll_to_bottom(),
            FeedMsg::Select(index) => {
                if !self.select_card(index) {
                    log::warn!(
                        "ignoring selection of card {index} (only {} cards)",
                        self.card_count
                    );
                }
            }
            FeedMsg::Deselect => self.select(None),
            FeedMsg::MenuTapped(index) => {
                // Card menus have no entries yet
                log::debug!("menu tapped on card {index}");
            }
        }

        if before != self.selected {
            vec![Cmd::RequestRender]
        } else {
            vec![]
        }
    }
}

impl ScrollableList for FeedState {
    fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn len(&self) -> usize {
        self.card_count
    }
}
