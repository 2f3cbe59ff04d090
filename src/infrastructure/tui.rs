//! Terminal abstraction
//!
//! [`TuiLike`] is what the app runner drives. [`real::RealTui`] talks to the
//! user's terminal; [`test::TestTui`] replays a fixed event queue into an
//! in-memory buffer.

pub mod real;

use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

pub type Frame<'a> = ratatui::Frame<'a>;

/// Everything a terminal session can report to the runner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    /// The event source is gone.
    Closed,
    Tick,
    Render,
    Key(KeyEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    /// Leaves the terminal and stops the process until it is continued.
    fn suspend(&mut self) -> Result<()>;
    /// Forgets what is on screen so the next draw repaints every cell.
    fn clear(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    /// `None` once no more events will arrive.
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
