use ratatui::prelude::*;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    domain::{post::Post, text::fit_lines},
    presentation::{
        config::styles::{Styles, ThemeToken},
        widgets::thumbnail::Thumbnail,
    },
};

pub const MENU_GLYPH: &str = "⋮";
pub const PLAY_GLYPH: &str = "▶";
const GUTTER_GLYPH: &str = "▌";
const META_SEPARATOR: &str = " · ";

const HERO_BANNER_HEIGHT: u16 = 4;
const SIDE_THUMBNAIL_WIDTH: u16 = 6;
const SIDE_THUMBNAIL_HEIGHT: u16 = 3;
// Gutter column plus one space before the card body
const GUTTER_WIDTH: u16 = 2;

/// Visual treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CardVariant {
    Hero,
    Article,
    Audio,
}

impl CardVariant {
    /// Rows a card of this variant occupies, including the blank row below it.
    pub fn height(self) -> u16 {
        match self {
            CardVariant::Hero => HERO_BANNER_HEIGHT + 4,
            CardVariant::Article | CardVariant::Audio => SIDE_THUMBNAIL_HEIGHT + 1,
        }
    }

    /// Glyph drawn at the right edge of the card, if any.
    pub fn trailing_glyph(self) -> Option<&'static str> {
        match self {
            CardVariant::Hero => None,
            CardVariant::Article => Some(MENU_GLYPH),
            CardVariant::Audio => Some(PLAY_GLYPH),
        }
    }
}

/// The handful of theme styles a card needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardTheme {
    pub headline: Style,
    pub hero_headline: Style,
    pub author: Style,
    pub meta: Style,
    pub glyph: Style,
    pub selected: Style,
}

impl CardTheme {
    pub fn from_styles(styles: &Styles) -> Self {
        Self {
            headline: styles.token(ThemeToken::Foreground),
            hero_headline: styles
                .token(ThemeToken::Accent)
                .add_modifier(Modifier::BOLD),
            author: styles.token(ThemeToken::Secondary),
            meta: styles.token(ThemeToken::Muted),
            glyph: styles.token(ThemeToken::Muted),
            selected: styles.token(ThemeToken::Selected),
        }
    }
}

/// A news card: thumbnail, headline, author and date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsCard {
    pub headline: String,
    pub author: String,
    pub date: String,
    pub thumbnail: Thumbnail,
    pub variant: CardVariant,
    pub theme: CardTheme,
    pub highlight: bool,
}

impl NewsCard {
    pub fn new(post: &Post, variant: CardVariant, thumbnail: Thumbnail) -> Self {
        Self {
            headline: post.title.clone(),
            author: post.author_name().to_string(),
            date: post.date().to_string(),
            thumbnail,
            variant,
            theme: CardTheme::default(),
            highlight: false,
        }
    }

    pub fn theme(mut self, theme: CardTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn height(&self) -> u16 {
        self.variant.height()
    }

    fn meta_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled(self.author.as_str(), self.theme.author),
            Span::styled(META_SEPARATOR, self.theme.meta),
            Span::styled(self.date.as_str(), self.theme.meta),
        ])
    }

    fn render_gutter(&self, area: Rect, buf: &mut Buffer) {
        if !self.highlight {
            return;
        }
        // Highlight every row but the trailing blank one
        for y in area.top()..area.bottom().saturating_sub(1) {
            buf.set_string(area.x, y, GUTTER_GLYPH, self.theme.selected);
        }
    }

    fn render_hero(&self, body: Rect, buf: &mut Buffer) {
        let [banner, headline, meta, _] = Layout::vertical([
            Constraint::Length(HERO_BANNER_HEIGHT),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        self.thumbnail.clone().render(banner, buf);
        let headline_style = if self.highlight {
            self.theme.hero_headline.patch(self.theme.selected)
        } else {
            self.theme.hero_headline
        };
        render_headline(&self.headline, headline_style, headline, buf);
        self.meta_line().render(meta, buf);
    }

    fn render_side(&self, body: Rect, buf: &mut Buffer) {
        let [thumbnail, _, text, _, glyph] = Layout::horizontal([
            Constraint::Length(SIDE_THUMBNAIL_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(body);
        let [thumbnail, _] = Layout::vertical([
            Constraint::Length(SIDE_THUMBNAIL_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(thumbnail);
        let [headline, meta, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(text);

        self.thumbnail.clone().render(thumbnail, buf);
        let headline_style = if self.highlight {
            self.theme.headline.patch(self.theme.selected)
        } else {
            self.theme.headline
        };
        render_headline(&self.headline, headline_style, headline, buf);
        self.meta_line().render(meta, buf);

        if let Some(trailing) = self.variant.trailing_glyph() {
            Span::styled(trailing, self.theme.glyph).render(glyph, buf);
        }
    }
}

fn render_headline(headline: &str, style: Style, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = fit_lines(headline, area.width as usize, area.height as usize)
        .into_iter()
        .map(|line| Line::styled(line, style))
        .collect();
    Text::from(lines).render(area, buf);
}

impl Widget for NewsCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        self.render_gutter(area, buf);
        let body = Rect {
            x: area.x.saturating_add(GUTTER_WIDTH),
            width: area.width.saturating_sub(GUTTER_WIDTH),
            ..area
        };
        match self.variant {
            CardVariant::Hero => self.render_hero(body, buf),
            CardVariant::Article | CardVariant::Audio => self.render_side(body, buf),
        }
    }
}
