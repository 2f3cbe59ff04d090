//! The Elm loop
//!
//! Raw terminal input is translated into [`msg::Msg`]s, `update` folds each
//! message into [`state::AppState`] and returns [`cmd::Cmd`]s for the runner
//! to execute. Nothing in here touches the terminal.

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
