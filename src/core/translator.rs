use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{dialog::DialogMsg, feed::FeedMsg, search::SearchMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};
use crate::presentation::{
    components::home::compose_screen,
    config::keybindings::{key_event_to_string, Action},
};

pub const NO_CARD_SELECTED: &str = "No card selected";

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-c quits whatever the keybindings say
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // The dialog is modal
    if state.dialog.is_open() {
        return translate_dialog_keys(key);
    }

    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    translate_search_input(key)
}

/// Key bindings while the dialog is open: confirm closes it, everything else is swallowed
fn translate_dialog_keys(key: KeyEvent) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => vec![Msg::Dialog(DialogMsg::Confirm)],

        KeyEvent {
            code: KeyCode::Char('o'),
            modifiers: KeyModifiers::NONE,
            ..
        } => vec![Msg::Dialog(DialogMsg::Confirm)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Dialog(DialogMsg::DismissRequest)],

        _ => {
            log::trace!("dialog open, ignoring {}", key_event_to_string(&key));
            vec![]
        }
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::ScrollUp => browse(state, FeedMsg::ScrollUp),
        Action::ScrollDown => browse(state, FeedMsg::ScrollDown),
        Action::ScrollToTop => browse(state, FeedMsg::ScrollToTop),
        Action::ScrollToBottom => browse(state, FeedMsg::ScrollToBottom),
        Action::Unselect => browse(state, FeedMsg::Deselect),
        Action::TapCard => translate_card_tap(state),
        Action::TapMenu => translate_menu_tap(state),
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// Moving the focus also drops a stale status message
fn browse(state: &AppState, msg: FeedMsg) -> Vec<Msg> {
    let mut msgs = Vec::with_capacity(2);
    if state.system.status_message.is_some() {
        msgs.push(Msg::System(SystemMsg::ClearStatusMessage));
    }
    msgs.push(Msg::Feed(msg));
    msgs
}

/// Runs the tap context of the focused card, if it has one
fn translate_card_tap(state: &AppState) -> Vec<Msg> {
    let Some(index) = state.feed.selected() else {
        return vec![Msg::System(SystemMsg::UpdateStatusMessage(
            NO_CARD_SELECTED.to_string(),
        ))];
    };

    let screen = compose_screen(&state.catalog);
    match screen.card(index).and_then(|card| card.on_tap.as_ref()) {
        Some(tap) => vec![tap.to_msg()],
        None => {
            log::debug!("card {index} has no tap handler");
            vec![]
        }
    }
}

fn translate_menu_tap(state: &AppState) -> Vec<Msg> {
    let Some(index) = state.feed.selected() else {
        return vec![Msg::System(SystemMsg::UpdateStatusMessage(
            NO_CARD_SELECTED.to_string(),
        ))];
    };

    let screen = compose_screen(&state.catalog);
    match screen.card(index).and_then(|card| card.on_menu) {
        Some(menu) => vec![menu.to_msg()],
        None => {
            log::debug!("card {index} has no menu");
            vec![]
        }
    }
}

/// Unbound printable keys go to the search field
fn translate_search_input(key: KeyEvent) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => vec![Msg::Search(SearchMsg::QueryChanged(c.to_string()))],
        _ => vec![],
    }
}
