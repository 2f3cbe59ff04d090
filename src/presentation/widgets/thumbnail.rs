use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER_GLYPH: &str = "░";

/// Text-mode stand-in for an article image: one glyph tiled over the area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    glyph: String,
    style: Style,
}

impl Thumbnail {
    pub fn new(glyph: impl Into<String>, style: Style) -> Self {
        Self {
            glyph: glyph.into(),
            style,
        }
    }

    /// Drawn for images the thumbnail source does not know.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_GLYPH, Style::default().fg(Color::DarkGray))
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn style(&self) -> Style {
        self.style
    }
}

impl Widget for Thumbnail {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let glyph_width = self.glyph.width().max(1);
        let row = self.glyph.repeat(area.width as usize / glyph_width);
        for y in area.top()..area.bottom() {
            buf.set_stringn(area.x, y, &row, area.width as usize, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fills_area_with_glyph() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        Thumbnail::new("▚", Style::default()).render(Rect::new(1, 0, 2, 2), &mut buf);

        assert_eq!(buf, Buffer::with_lines([" ▚▚ ", " ▚▚ "]));
    }

    #[test]
    fn test_wide_glyph_does_not_overflow() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        Thumbnail::new("■■", Style::default()).render(buf.area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["■■ "]));
    }

    #[test]
    fn test_placeholder() {
        let placeholder = Thumbnail::placeholder();
        assert_eq!(placeholder.glyph(), "░");
        assert_eq!(placeholder.style(), Style::default().fg(Color::DarkGray));
    }
}
