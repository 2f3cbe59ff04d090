use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::post::Post;

/// What the bottom line shows, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Message(String),
    Focused { author: String, read_time_minutes: u32 },
    Hint(String),
}

impl StatusLine {
    pub fn resolve(message: Option<&str>, focused: Option<&Post>, hint: &str) -> Self {
        match (message, focused) {
            (Some(message), _) => StatusLine::Message(message.to_string()),
            (None, Some(post)) => StatusLine::Focused {
                author: post.author_name().to_string(),
                read_time_minutes: post.read_time_minutes(),
            },
            (None, None) => StatusLine::Hint(hint.to_string()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            StatusLine::Message(message) => message.clone(),
            StatusLine::Focused {
                author,
                read_time_minutes,
            } => format!("{author} · {read_time_minutes} min read"),
            StatusLine::Hint(hint) => hint.clone(),
        }
    }
}

pub struct StatusBarWidget {
    line: StatusLine,
    style: Style,
}

impl StatusBarWidget {
    pub fn new(line: StatusLine, style: Style) -> Self {
        Self { line, style }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(self.line.text())
            .style(self.style)
            .render(area, buf);
    }
}
