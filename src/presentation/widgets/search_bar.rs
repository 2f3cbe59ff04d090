use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use super::news_card::MENU_GLYPH;

const SEARCH_ICON: &str = "⌕";

/// Decorative search field. The query is always empty, so only the placeholder shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    pub placeholder: String,
    pub border_style: Style,
    pub placeholder_style: Style,
    pub icon_style: Style,
}

impl SearchBar {
    pub const HEIGHT: u16 = 3;

    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            border_style: Style::default(),
            placeholder_style: Style::default(),
            icon_style: Style::default(),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    pub fn icon_style(mut self, style: Style) -> Self {
        self.icon_style = style;
        self
    }
}

impl Widget for SearchBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [icon, _, placeholder, more] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);
        Span::styled(SEARCH_ICON, self.icon_style).render(icon, buf);
        Span::styled(self.placeholder.as_str(), self.placeholder_style).render(placeholder, buf);
        Span::styled(MENU_GLYPH, self.icon_style).render(more, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, SearchBar::HEIGHT));
        SearchBar::new("Search articles").render(buf.area, &mut buf);

        assert_eq!(
            buf,
            Buffer::with_lines([
                "╭──────────────────────╮",
                "│⌕ Search articles    ⋮│",
                "╰──────────────────────╯",
            ])
        );
    }
}
