use crate::core::{
    cmd::Cmd,
    msg::{search::SearchMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Card focus (delegated to FeedState)
        Msg::Feed(feed_msg) => {
            let commands = state.feed.update(feed_msg);
            (state, commands)
        }

        // Dialog (delegated to DialogState)
        Msg::Dialog(dialog_msg) => {
            let commands = state.dialog.update(dialog_msg);
            (state, commands)
        }

        // The search field is decorative: the query stays empty
        Msg::Search(SearchMsg::QueryChanged(query)) => {
            log::trace!("ignoring search query {query:?}");
            (state, vec![])
        }
    }
}
