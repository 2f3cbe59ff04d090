use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use rstest::*;

use hellonews::{
    core::{
        msg::{feed::FeedMsg, system::SystemMsg, Msg},
        state::AppState,
        update::update,
    },
    domain::catalog::Catalog,
    infrastructure::config::Config,
    presentation::{
        components::{home::compose_screen, HomeScreen},
        config::styles::ThemeToken,
        widgets::news_card::{CardVariant, MENU_GLYPH, PLAY_GLYPH},
    },
};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

#[fixture]
fn state() -> AppState {
    let catalog = Catalog::sample().expect("sample catalog is valid");
    let config = Config::builtin().expect("default config parses");
    AppState::new_with_config(catalog, config)
}

fn render_buffer(state: &AppState, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| HomeScreen::new().view(state, frame, frame.area()))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
    let buffer = render_buffer(state, width, height);
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn screen_text(lines: &[String]) -> String {
    lines.join("\n")
}

#[rstest]
fn test_initial_screen_shows_top_of_feed(state: AppState) {
    let lines = render(&state, WIDTH, HEIGHT);
    let text = screen_text(&lines);

    assert!(lines[0].contains('╭'));
    assert!(lines[1].contains("Search articles"));
    assert!(lines[1].contains(MENU_GLYPH));
    assert!(text.contains(&state.catalog.hero().title));
    assert!(text.contains("Seasonal Sagas · 20 days ago"));
    assert!(text.contains("MORE"));
    assert!(text.contains("Audio stories"));
    assert!(text.contains("Play all"));
}

#[rstest]
fn test_status_line_shows_hint_when_nothing_is_focused(state: AppState) {
    let lines = render(&state, WIDTH, HEIGHT);

    assert_eq!(
        lines[HEIGHT as usize - 1].trim_end(),
        "j/k: move  enter: open  m: menu  q: quit"
    );
}

#[rstest]
fn test_focusing_last_card_scrolls_and_summarizes(state: AppState) {
    let (state, _) = update(Msg::Feed(FeedMsg::ScrollToBottom), state);
    let lines = render(&state, WIDTH, HEIGHT);
    let text = screen_text(&lines);

    assert!(text.contains("Episode 11"));
    assert!(text.contains(PLAY_GLYPH));
    assert_eq!(
        lines[HEIGHT as usize - 1].trim_end(),
        "Light Labs · 45 min read"
    );
}

#[rstest]
fn test_status_message_wins_over_focus(state: AppState) {
    let (state, _) = update(Msg::Feed(FeedMsg::ScrollDown), state);
    let (state, _) = update(
        Msg::System(SystemMsg::UpdateStatusMessage("hello".into())),
        state,
    );
    let lines = render(&state, WIDTH, HEIGHT);

    assert_eq!(lines[HEIGHT as usize - 1].trim_end(), "hello");
}

#[rstest]
fn test_unknown_images_render_placeholders() {
    let catalog = Catalog::sample().expect("sample catalog is valid");
    // No thumbnails configured at all
    let state = AppState::new_with_config(catalog, Config::default());
    let text = screen_text(&render(&state, WIDTH, HEIGHT));

    assert!(text.contains("░░░░"));
}

#[rstest]
fn test_render_is_idempotent(state: AppState) {
    assert_eq!(
        render(&state, WIDTH, HEIGHT),
        render(&state, WIDTH, HEIGHT)
    );
}

#[rstest]
fn test_tiny_terminal_does_not_panic(state: AppState) {
    render(&state, 10, 3);
}

#[rstest]
fn test_seven_posts_compose_to_expected_cards(state: AppState) {
    let screen = compose_screen(&state.catalog);
    let hero: Vec<usize> = screen
        .cards()
        .filter(|card| card.variant == CardVariant::Hero)
        .map(|card| card.post_index)
        .collect();
    let articles: Vec<usize> = screen
        .cards()
        .filter(|card| card.variant == CardVariant::Article)
        .map(|card| card.post_index)
        .collect();
    let audio: Vec<usize> = screen
        .cards()
        .filter(|card| card.variant == CardVariant::Audio)
        .map(|card| card.post_index)
        .collect();

    assert_eq!(hero, vec![0]);
    assert_eq!(articles, vec![1, 2, 3]);
    assert_eq!(audio, vec![4, 5, 6]);
}

#[rstest]
fn test_search_icons_use_on_secondary_color(state: AppState) {
    let buffer = render_buffer(&state, WIDTH, HEIGHT);
    let expected = state.config.config.styles.token(ThemeToken::OnSecondary).fg;

    for glyph in ["⌕", MENU_GLYPH] {
        let x = (0..WIDTH)
            .find(|&x| buffer[(x, 1)].symbol() == glyph)
            .expect("glyph on the search row");
        assert_eq!(buffer[(x, 1)].fg, expected.expect("on_secondary has a color"));
    }
}
