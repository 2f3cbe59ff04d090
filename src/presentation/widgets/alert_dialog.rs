use crate::domain::text::wrap_text;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 50;

/// Centered modal with a title, a body and a single confirm button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDialog {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub style: Style,
    pub title_style: Style,
    pub button_style: Style,
}

impl AlertDialog {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        confirm_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            confirm_label: confirm_label.into(),
            style: Style::default(),
            title_style: Style::default().add_modifier(Modifier::BOLD),
            button_style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }

    pub fn button_text(&self) -> String {
        format!("[ {} ]", self.confirm_label)
    }

    /// Where the dialog lands inside `area`.
    pub fn popup_area(&self, area: Rect) -> Rect {
        // Widened so large terminals cannot overflow; the result fits back in u16
        let three_fifths = (u32::from(area.width) * 3 / 5) as u16;
        let width = three_fifths.clamp(MIN_WIDTH.min(area.width), MAX_WIDTH.min(area.width));
        // Borders and padding take two columns on each side
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let text_lines = line_count(&self.title, inner_width) + line_count(&self.body, inner_width);
        // Two borders, the blank line under the title, the blank line and the button
        let height = (text_lines + 5).min(area.height);

        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(layout::Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(height)])
            .flex(layout::Flex::Center)
            .areas(popup);
        popup
    }
}

fn line_count(s: &str, width: usize) -> u16 {
    wrap_text(s, width).lines().count().max(1) as u16
}

impl Widget for AlertDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .style(self.style);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [text, button] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let content = Text::from(vec![
            Line::styled(self.title.as_str(), self.title_style),
            Line::default(),
            Line::from(self.body.as_str()),
        ]);
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .render(text, buf);

        Line::styled(self.button_text(), self.button_style)
            .right_aligned()
            .render(button, buf);
    }
}
