//! Home screen
//!
//! [`compose_screen`] turns the catalog into an ordered list of rows, and
//! [`HomeScreen::view`] renders those rows as a scrollable list with the
//! status bar below and the dialog on top.

use ratatui::{prelude::*, widgets::*};
use serde::Serialize;
use tui_widget_list::{ListBuilder, ListView};

use crate::{
    core::{
        msg::{dialog::DialogMsg, feed::FeedMsg, Msg},
        state::AppState,
    },
    domain::catalog::Catalog,
    presentation::{
        config::{
            strings::StringKey,
            styles::{Styles, ThemeToken},
            thumbnails::ImageSource,
        },
        widgets::{
            alert_dialog::AlertDialog,
            news_card::{CardTheme, CardVariant, NewsCard},
            search_bar::SearchBar,
            section_title::{Divider, SectionTitle, TextButton},
            status_bar::{StatusBarWidget, StatusLine},
        },
    },
};

pub mod sections;

/// Body of the dialog opened by tapping a card.
pub const CARD_TAPPED: &str = "Card Tapped";

const MORE_BUTTON_HEIGHT: u16 = 2;
const AUDIO_TITLE_HEIGHT: u16 = 2;
const DIVIDER_HEIGHT: u16 = 1;

/// What tapping a card does: open the dialog with this title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapContext {
    pub title: String,
    pub body: String,
}

impl TapContext {
    pub fn card_tapped(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: CARD_TAPPED.to_string(),
        }
    }

    pub fn to_msg(&self) -> Msg {
        Msg::Dialog(DialogMsg::Open {
            title: self.title.clone(),
            body: self.body.clone(),
        })
    }
}

/// What tapping a card's "more actions" glyph does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuContext {
    pub post_index: usize,
}

impl MenuContext {
    pub fn to_msg(self) -> Msg {
        Msg::Feed(FeedMsg::MenuTapped(self.post_index))
    }
}

/// One card of the screen. `post_index` is the catalog position, which is also the card index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardModel {
    pub post_index: usize,
    pub variant: CardVariant,
    pub on_tap: Option<TapContext>,
    pub on_menu: Option<MenuContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScreenRow {
    SearchBar,
    Card(CardModel),
    MoreButton,
    Divider,
    AudioTitle,
}

impl ScreenRow {
    pub fn height(&self) -> u16 {
        match self {
            ScreenRow::SearchBar => SearchBar::HEIGHT,
            ScreenRow::Card(card) => card.variant.height(),
            ScreenRow::MoreButton => MORE_BUTTON_HEIGHT,
            ScreenRow::Divider => DIVIDER_HEIGHT,
            ScreenRow::AudioTitle => AUDIO_TITLE_HEIGHT,
        }
    }
}

/// The home screen as an ordered list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    rows: Vec<ScreenRow>,
}

impl Screen {
    pub fn rows(&self) -> &[ScreenRow] {
        &self.rows
    }

    /// Cards in catalog order.
    pub fn cards(&self) -> impl Iterator<Item = &CardModel> {
        self.rows.iter().filter_map(|row| match row {
            ScreenRow::Card(card) => Some(card),
            _ => None,
        })
    }

    pub fn card(&self, index: usize) -> Option<&CardModel> {
        self.cards().find(|card| card.post_index == index)
    }

    /// Row holding the card at `index`.
    pub fn row_of_card(&self, index: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, ScreenRow::Card(card) if card.post_index == index))
    }

    pub fn count(&self, variant: CardVariant) -> usize {
        self.cards().filter(|card| card.variant == variant).count()
    }
}

/// Search bar, hero and articles, "More", divider, audio title, audio cards.
pub fn compose_screen(catalog: &Catalog) -> Screen {
    let mut rows = sections::search_section();
    rows.extend(sections::top_section(catalog));
    rows.push(ScreenRow::Divider);
    rows.extend(sections::audio_section(catalog));
    Screen { rows }
}

/// A screen row ready to draw.
#[derive(Debug, Clone)]
enum RowWidget {
    SearchBar(SearchBar),
    Card(Box<NewsCard>),
    MoreButton(TextButton),
    Divider(Divider),
    AudioTitle(SectionTitle),
    Blank,
}

impl Widget for RowWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            RowWidget::SearchBar(search_bar) => search_bar.render(area, buf),
            RowWidget::Card(card) => card.render(area, buf),
            RowWidget::MoreButton(button) => {
                // Indented to line up with card bodies
                let area = Rect {
                    x: area.x.saturating_add(2),
                    width: area.width.saturating_sub(2),
                    ..area
                };
                button.render(area, buf)
            }
            RowWidget::Divider(divider) => divider.render(area, buf),
            RowWidget::AudioTitle(title) => title.render(area, buf),
            RowWidget::Blank => {}
        }
    }
}

/// Home screen view
///
/// Stateless: every frame is derived from `AppState` alone.
#[derive(Debug, Clone, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let base = base_style(styles);

        let [list_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let screen = compose_screen(&state.catalog);
        let rows: Vec<(RowWidget, u16)> = screen
            .rows()
            .iter()
            .map(|row| (self.row_widget(row, state), row.height()))
            .collect();
        let row_count = rows.len();

        let builder = ListBuilder::new(move |context| {
            let mut item = rows[context.index].clone();
            if let RowWidget::Card(card) = &mut item.0 {
                card.highlight = context.is_selected;
            }
            item
        });

        let mut list_state = tui_widget_list::ListState::default();
        list_state.select(state.feed.selected().and_then(|i| screen.row_of_card(i)));

        let list = ListView::new(builder, row_count)
            .block(Block::default().padding(Padding::horizontal(1)))
            .style(base);
        frame.render_stateful_widget(list, list_area, &mut list_state);

        let status_line = StatusLine::resolve(
            state.system.status_message.as_deref(),
            state.selected_post(),
            config.strings.text(StringKey::Hint),
        );
        frame.render_widget(
            StatusBarWidget::new(status_line, styles.token(ThemeToken::Surface)),
            status_area,
        );

        if state.dialog.is_open() {
            let dialog = AlertDialog::new(
                state.dialog.title(),
                state.dialog.body(),
                config.strings.text(StringKey::DialogConfirm),
            )
            .style(base)
            .title_style(styles.token(ThemeToken::Accent))
            .button_style(styles.token(ThemeToken::Selected));
            frame.render_widget(dialog, area);
        }
    }

    fn row_widget(&self, row: &ScreenRow, state: &AppState) -> RowWidget {
        let config = &state.config.config;
        let styles = &config.styles;
        let strings = &config.strings;

        match row {
            ScreenRow::SearchBar => RowWidget::SearchBar(
                SearchBar::new(strings.text(StringKey::CdSearchArticles))
                    .border_style(styles.token(ThemeToken::Surface))
                    .placeholder_style(styles.token(ThemeToken::Muted))
                    .icon_style(styles.token(ThemeToken::OnSecondary)),
            ),
            ScreenRow::Card(card) => match state.catalog.get(card.post_index) {
                Some(post) => RowWidget::Card(Box::new(
                    NewsCard::new(
                        post,
                        card.variant,
                        config.thumbnails.thumbnail_or_placeholder(&post.image_id),
                    )
                    .theme(CardTheme::from_styles(styles)),
                )),
                None => {
                    log::warn!("no post at index {}", card.post_index);
                    RowWidget::Blank
                }
            },
            ScreenRow::MoreButton => RowWidget::MoreButton(TextButton::new(
                strings.text(StringKey::HomeMore),
                styles.token(ThemeToken::Accent),
            )),
            ScreenRow::Divider => RowWidget::Divider(Divider {
                style: styles.token(ThemeToken::Surface),
            }),
            ScreenRow::AudioTitle => RowWidget::AudioTitle(
                SectionTitle::new(strings.text(StringKey::HomeAudioSectionTitle))
                    .title_style(styles.token(ThemeToken::Foreground).add_modifier(Modifier::BOLD))
                    .action(strings.text(StringKey::HomePlayAll))
                    .action_style(styles.token(ThemeToken::Accent)),
            ),
        }
    }
}

fn base_style(styles: &Styles) -> Style {
    styles
        .token(ThemeToken::Foreground)
        .patch(styles.token(ThemeToken::Background))
}
