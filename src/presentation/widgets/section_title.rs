use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Section heading with an optional action label on the right, e.g. "Audio stories ... Play all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTitle {
    pub title: String,
    pub action: Option<String>,
    pub title_style: Style,
    pub action_style: Style,
}

impl SectionTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            action: None,
            title_style: Style::default(),
            action_style: Style::default(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn action_style(mut self, style: Style) -> Self {
        self.action_style = style;
        self
    }
}

impl Widget for SectionTitle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let action_width = self.action.as_deref().map(|a| a.width()).unwrap_or(0) as u16;
        let [title, action] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(action_width)]).areas(area);

        Span::styled(self.title.as_str(), self.title_style).render(title, buf);
        if let Some(label) = self.action.as_deref() {
            Span::styled(label, self.action_style).render(action, buf);
        }
    }
}

/// Left-aligned text button, like the "More" button under the articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextButton {
    pub label: String,
    pub style: Style,
}

impl TextButton {
    pub fn new(label: impl Into<String>, style: Style) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }
}

impl Widget for TextButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Span::styled(self.label.to_uppercase(), self.style).render(area, buf);
    }
}

/// Full-width horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Divider {
    pub style: Style,
}

impl Widget for Divider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            buf.set_string(area.x, y, "─".repeat(area.width as usize), self.style);
        }
    }
}
